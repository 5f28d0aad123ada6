//! Formatting helpers for presenting record fields.

pub fn format_likes(count: u32) -> String {
    format!("{count} likes")
}

pub fn format_comments(count: u32) -> String {
    format!("{count} comments")
}

/// `"10.99"` → `"$10.99"`.
pub fn format_price(decimal: &str) -> String {
    format!("${decimal}")
}

pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

pub fn format_results(count: usize) -> String {
    match count {
        1 => "1 result".to_string(),
        n => format!("{n} results"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(format_likes(21), "21 likes");
        assert_eq!(format_comments(4), "4 comments");
        assert_eq!(format_price("10.99"), "$10.99");
        assert_eq!(format_rating(4.5), "4.5");
        assert_eq!(format_results(0), "0 results");
        assert_eq!(format_results(1), "1 result");
    }
}
