// src/messages.rs
//
// Builds the ordered list of scrolling announcements from the current
// snapshot. The list is rebuilt in full on every reload; ordering is fixed
// and significant: date, suspensions, delays, weather, then the error or
// all-clear tail.

use chrono::{Datelike, NaiveDateTime};
use serde_json::Value;

use crate::display::palette::Color;
use crate::docs;
use crate::snapshot::Snapshot;

/// Localized short weekday names, indexed from Sunday = 0.
const WDAY_NAMES: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

const DETAIL_UNKNOWN: &str = "詳細不明";
const DEPARTURE_ERROR: &str = "エラーが発生しています。情報が取得できていません";
const ALL_CLEAR: &str = "平常運転";

/// One color-tagged scrolling announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollMessage {
    pub text: String,
    pub color: Color,
}

/// Compose the full announcement list for a snapshot. Pure function of its
/// inputs; `now` only feeds the date message.
pub fn compose(snapshot: &Snapshot, now: NaiveDateTime) -> Vec<ScrollMessage> {
    let mut messages = Vec::new();

    let wday = WDAY_NAMES[now.weekday().num_days_from_sunday() as usize];
    messages.push(ScrollMessage {
        text: format!("本日は {:02}月{:02}日（{}）です", now.month(), now.day(), wday),
        color: Color::White,
    });

    if let Some(operation) = snapshot.operation.as_ref() {
        for item in docs::array_or_empty(operation, "suspend") {
            messages.push(ScrollMessage {
                text: format!(
                    "【運転見合わせ】 {}: {}",
                    docs::str_or(item, "name", ""),
                    docs::str_or(item, "detail", DETAIL_UNKNOWN)
                ),
                color: Color::Red,
            });
        }
        for item in docs::array_or_empty(operation, "delay") {
            messages.push(ScrollMessage {
                text: format!(
                    "【遅延】 {}: {}",
                    docs::str_or(item, "name", ""),
                    docs::str_or(item, "detail", DETAIL_UNKNOWN)
                ),
                color: Color::Yellow,
            });
        }
    }

    if let Some(weather) = snapshot.weather.as_ref() {
        // a failure here drops this one message and nothing else
        if let Some(msg) = weather_message(weather) {
            messages.push(msg);
        }
    }

    if docs::is_effectively_empty(snapshot.departure.as_ref()) {
        messages.push(ScrollMessage {
            text: DEPARTURE_ERROR.to_string(),
            color: Color::Red,
        });
    }

    // The date message above makes this unreachable; kept because the check
    // is defined against the whole list, not the post-date remainder.
    if messages.is_empty() {
        messages.push(ScrollMessage {
            text: ALL_CLEAR.to_string(),
            color: Color::Green,
        });
    }

    messages
}

/// Build the single weather summary message; None when the document is not
/// a mapping.
fn weather_message(weather: &Value) -> Option<ScrollMessage> {
    weather.as_object()?;
    let area = docs::str_or(weather, "area_name", "不明");
    let summary = docs::str_or(weather, "weather", "不明");
    let office = docs::str_or(weather, "publishing_office", " 気象庁");
    let report_time = docs::str_or(weather, "report_time", " ");
    Some(ScrollMessage {
        text: format!("【{} {}発表】{}の天気: {}", office, report_time, area, summary),
        color: Color::White,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    // 2026-08-30 is a Sunday
    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 30)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn snapshot(
        departure: Option<Value>,
        operation: Option<Value>,
        weather: Option<Value>,
    ) -> Snapshot {
        Snapshot { departure, operation, weather }
    }

    #[test]
    fn test_date_message_always_first() {
        let list = compose(&snapshot(None, None, None), now());
        assert_eq!(list[0].text, "本日は 08月30日（日）です");
        assert_eq!(list[0].color, Color::White);
    }

    #[test]
    fn test_list_never_empty() {
        let list = compose(&snapshot(None, None, None), now());
        assert!(!list.is_empty());
    }

    #[test]
    fn test_ordering_is_deterministic() {
        let operation = json!({
            "suspend": [
                {"name": "武蔵野線", "detail": "強風"},
                {"name": "京葉線", "detail": "点検"}
            ],
            "delay": [{"name": "中央線", "detail": "混雑"}]
        });
        let weather = json!({
            "area_name": "東京地方",
            "weather": "晴れ",
            "publishing_office": "気象庁",
            "report_time": "11時"
        });
        let departure = json!({"東京": {"segments": [{"type": "快速"}]}});
        let list = compose(
            &snapshot(Some(departure), Some(operation), Some(weather)),
            now(),
        );

        assert_eq!(list.len(), 5);
        assert!(list[0].text.starts_with("本日は"));
        assert_eq!(list[1].text, "【運転見合わせ】 武蔵野線: 強風");
        assert_eq!(list[1].color, Color::Red);
        assert_eq!(list[2].text, "【運転見合わせ】 京葉線: 点検");
        assert_eq!(list[3].text, "【遅延】 中央線: 混雑");
        assert_eq!(list[3].color, Color::Yellow);
        assert_eq!(list[4].text, "【気象庁 11時発表】東京地方の天気: 晴れ");
        assert_eq!(list[4].color, Color::White);
    }

    #[test]
    fn test_operation_field_defaults() {
        let operation = json!({"suspend": [{}], "delay": [{"name": "中央線"}]});
        let list = compose(&snapshot(Some(json!({"a": 1})), Some(operation), None), now());
        assert_eq!(list[1].text, "【運転見合わせ】 : 詳細不明");
        assert_eq!(list[2].text, "【遅延】 中央線: 詳細不明");
    }

    #[test]
    fn test_weather_field_defaults() {
        let list = compose(&snapshot(Some(json!({"a": 1})), None, Some(json!({}))), now());
        assert_eq!(list[1].text, "【 気象庁  発表】不明の天気: 不明");
    }

    #[test]
    fn test_non_mapping_weather_is_skipped() {
        let list = compose(
            &snapshot(Some(json!({"a": 1})), None, Some(json!(["not", "a", "map"]))),
            now(),
        );
        // only the date message; composition of the rest proceeded
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_scenario_suspend_with_absent_departure() {
        // departure absent, one suspension, weather absent
        let operation = json!({"suspend": [{"name": "Main Line", "detail": "accident"}]});
        let list = compose(&snapshot(None, Some(operation), None), now());

        assert_eq!(list.len(), 3);
        assert!(list[0].text.starts_with("本日は"));
        assert_eq!(list[1].text, "【運転見合わせ】 Main Line: accident");
        assert_eq!(list[1].color, Color::Red);
        assert_eq!(list[2].text, DEPARTURE_ERROR);
        assert_eq!(list[2].color, Color::Red);
        // no all-clear: the list is already non-trivial
        assert!(!list.iter().any(|m| m.text == ALL_CLEAR));
    }

    #[test]
    fn test_scenario_everything_absent() {
        let list = compose(&snapshot(None, None, None), now());
        // date + departure error; the all-clear tail never fires because
        // the emptiness check sees the date message
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].text, DEPARTURE_ERROR);
        assert!(!list.iter().any(|m| m.text == ALL_CLEAR));
    }

    #[test]
    fn test_empty_departure_mapping_is_an_error() {
        let list = compose(&snapshot(Some(json!({})), None, None), now());
        assert_eq!(list[1].text, DEPARTURE_ERROR);
    }
}
