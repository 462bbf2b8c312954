//! User-facing texts. Kept in one place; localization itself is out of scope.

pub fn welcome() -> &'static str {
    "Hi! Forward photo posts from the gallery channel to me and I will publish them."
}

pub fn help() -> &'static str {
    "Forward a photo post from the channel to update the gallery.\n\
     Admin commands set the mode for the next forwarded posts:\n\
     /update (/u, /upd) – plain update\n\
     /delete (/d, /rm) – hide the post\n\
     /fav (/f), /unfav (/uf) – set or clear the highlight\n\
     /month (/m), /year (/y) – toggle the month/year award\n\
     /myid – show your numeric id"
}

pub fn deny() -> &'static str {
    "Sorry, I only accept posts forwarded from the gallery channel by its admins."
}

pub fn my_id(id: i64) -> String {
    format!("Your id is {id}")
}

pub fn post_updated(id: i64) -> String {
    format!("Post {id} was updated")
}

pub fn channel_id(id: i64) -> String {
    format!("Channel id: {id}")
}

/// Commit/summary message the deploy hook receives in place of `%s`.
pub fn commit_message(updated: &[i64]) -> String {
    let posts = updated
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let date = chrono::Local::now().to_rfc2822().to_lowercase();
    format!(
        "gallery update {date}: {updated} post(s) updated ({posts})",
        updated = updated.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_message_lists_ids() {
        let msg = commit_message(&[12, 10]);
        assert!(msg.contains("2 post(s) updated"));
        assert!(msg.contains("12, 10"));
    }

    #[test]
    fn test_commit_message_empty_cycle() {
        let msg = commit_message(&[]);
        assert!(msg.contains("0 post(s) updated"));
    }
}
