//! Markdown summary pushed after a successful check-in.

use aliyunpan_api::Reward;

/// Title of every pushed notification.
pub const NOTIFY_TITLE: &str = "阿里云盘签到提醒";

const TODAY_ICON: &str = "✅";
const PAST_ICON: &str = "☑";

/// Summary text built by prepending lines, so the last line added is on top.
///
/// Each line is followed by a blank line (Markdown paragraph break).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
}

impl StatusMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `line` above everything added so far.
    pub fn prepend(&mut self, line: &str) {
        self.text = format!("{line}\n\n{}", self.text);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Lines of the message, top to bottom, without the blank separators.
    #[cfg(test)]
    pub(crate) fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split("\n\n").filter(|line| !line.is_empty())
    }
}

/// Line for one signed day; `streak` marks today's entry.
pub fn day_line(day: u32, streak: u32, reward: &Reward) -> String {
    let icon = if day == streak { TODAY_ICON } else { PAST_ICON };
    format!(
        "{icon}打卡第{day}天，获得奖励：**[{}->{}]**",
        reward.name, reward.description
    )
}

/// Overall progress line, placed at the top of the message.
pub fn progress_line(streak: u32, total: usize) -> String {
    format!("🔥打卡进度:{streak}/{total}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_line_today() {
        let line = day_line(5, 5, &Reward::new("A", "B"));
        assert_eq!(line, "✅打卡第5天，获得奖励：**[A->B]**");
    }

    #[test]
    fn test_day_line_past() {
        let line = day_line(5, 7, &Reward::new("A", "B"));
        assert_eq!(line, "☑打卡第5天，获得奖励：**[A->B]**");
    }

    #[test]
    fn test_day_line_unavailable_reward() {
        let line = day_line(2, 3, &Reward::unavailable());
        assert_eq!(line, "☑打卡第2天，获得奖励：**[null->null]**");
    }

    #[test]
    fn test_progress_line() {
        assert_eq!(progress_line(3, 31), "🔥打卡进度:3/31");
    }

    #[test]
    fn test_prepend_order() {
        let mut message = StatusMessage::new();
        assert_eq!(message.as_str(), "");

        message.prepend("day 1");
        message.prepend("day 2");
        message.prepend("progress");

        assert_eq!(message.as_str(), "progress\n\nday 2\n\nday 1\n\n");
        assert_eq!(
            message.lines().collect::<Vec<_>>(),
            vec!["progress", "day 2", "day 1"]
        );
    }
}
