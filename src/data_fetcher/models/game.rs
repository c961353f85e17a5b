use super::common::{GameId, Person, lenient_flag, lenient_record, lenient_text, null_as_default};
use serde::{Deserialize, Serialize};

/// Response of `GET /games/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDetail {
    #[serde(default)]
    pub id: Option<GameId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub races: Vec<Race>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Race {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    pub number: u32,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub starts: Vec<StartEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Horse {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    /// Number or string depending on the endpoint, kept as sent
    #[serde(default, deserialize_with = "lenient_text")]
    pub odds: Option<String>,
    /// Some responses nest the trainer under the horse
    #[serde(default, deserialize_with = "lenient_record")]
    pub trainer: Option<Person>,
}

/// A horse's start in a race.
///
/// Every nested record is optional and a value of an unexpected type
/// reads as missing, so one odd entry never fails the whole game.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StartEntry {
    #[serde(rename = "startNumber", default, deserialize_with = "lenient_text")]
    pub start_number: Option<String>,
    /// The live API sends `number`; `startNumber` wins when both are present.
    #[serde(default, deserialize_with = "lenient_text")]
    pub number: Option<String>,
    #[serde(default, deserialize_with = "lenient_record")]
    pub horse: Option<Horse>,
    #[serde(default, deserialize_with = "lenient_record")]
    pub driver: Option<Person>,
    #[serde(default, deserialize_with = "lenient_record")]
    pub trainer: Option<Person>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub scratched: bool,
}

/// One exported line of a startlist, every field already rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StartlistRow {
    pub start_number: String,
    pub horse: String,
    pub odds: String,
    pub driver: String,
    pub trainer: String,
}

impl StartlistRow {
    /// Fields in header order.
    pub fn fields(&self) -> [&str; 5] {
        [
            self.start_number.as_str(),
            self.horse.as_str(),
            self.odds.as_str(),
            self.driver.as_str(),
            self.trainer.as_str(),
        ]
    }
}

impl StartEntry {
    pub fn start_number(&self) -> Option<&str> {
        self.start_number.as_deref().or(self.number.as_deref())
    }

    /// Trainer from the start record, falling back to the one nested under the horse.
    pub fn trainer(&self) -> Option<&Person> {
        self.trainer
            .as_ref()
            .or_else(|| self.horse.as_ref().and_then(|horse| horse.trainer.as_ref()))
    }

    /// Renders the entry; anything missing becomes an empty field.
    pub fn to_row(&self) -> StartlistRow {
        let horse = self.horse.as_ref();
        StartlistRow {
            start_number: self.start_number().unwrap_or_default().to_string(),
            horse: horse
                .and_then(|horse| horse.name.clone())
                .unwrap_or_default(),
            odds: horse
                .and_then(|horse| horse.odds.clone())
                .unwrap_or_default(),
            driver: self
                .driver
                .as_ref()
                .map(Person::display_name)
                .unwrap_or_default(),
            trainer: self
                .trainer()
                .map(Person::display_name)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_start_entry_row() {
        let entry: StartEntry = serde_json::from_str(
            r#"{
                "startNumber": 3,
                "horse": {"name": "Don Fanucci Zet", "odds": 2.45},
                "driver": {"name": "Örjan Kihlström"},
                "trainer": {"name": "Daniel Redén"}
            }"#,
        )
        .unwrap();

        assert_eq!(
            entry.to_row(),
            StartlistRow {
                start_number: "3".to_string(),
                horse: "Don Fanucci Zet".to_string(),
                odds: "2.45".to_string(),
                driver: "Örjan Kihlström".to_string(),
                trainer: "Daniel Redén".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_nested_records_render_empty() {
        let entry: StartEntry = serde_json::from_str(r#"{"startNumber": 7}"#).unwrap();
        let row = entry.to_row();
        assert_eq!(row.fields(), ["7", "", "", "", ""]);
    }

    #[test]
    fn test_null_nested_records_render_empty() {
        let entry: StartEntry = serde_json::from_str(
            r#"{"horse": null, "driver": null, "trainer": null, "scratched": null}"#,
        )
        .unwrap();
        assert_eq!(entry.to_row(), StartlistRow::default());
        assert!(!entry.scratched);
    }

    #[test]
    fn test_horse_without_odds() {
        let entry: StartEntry =
            serde_json::from_str(r#"{"startNumber": 1, "horse": {"name": "Bold Eagle"}}"#)
                .unwrap();
        assert_eq!(entry.to_row().fields(), ["1", "Bold Eagle", "", "", ""]);
    }

    #[test]
    fn test_odds_variants() {
        let cases = [
            (r#"{"horse": {"odds": 1245}}"#, "1245"),
            (r#"{"horse": {"odds": "12,45"}}"#, "12,45"),
            (r#"{"horse": {"odds": null}}"#, ""),
            (r#"{"horse": {"odds": 3.5}}"#, "3.5"),
        ];
        for (json, expected) in cases {
            let entry: StartEntry = serde_json::from_str(json).unwrap();
            assert_eq!(entry.to_row().odds, expected, "for {json}");
        }
    }

    #[test]
    fn test_number_key_for_start_number() {
        let entry: StartEntry = serde_json::from_str(r#"{"number": 12}"#).unwrap();
        assert_eq!(entry.start_number(), Some("12"));
    }

    #[test]
    fn test_both_start_number_keys() {
        let entry: StartEntry = serde_json::from_str(
            r#"{"startNumber": 1, "number": 7, "horse": {"name": "A"}}"#,
        )
        .unwrap();
        assert_eq!(entry.to_row().fields(), ["1", "A", "", "", ""]);
    }

    #[test]
    fn test_start_number_as_string() {
        let entry: StartEntry =
            serde_json::from_str(r#"{"startNumber": "3", "horse": {"name": "B"}}"#).unwrap();
        assert_eq!(entry.to_row().start_number, "3");
    }

    #[test]
    fn test_unexpected_types_render_empty() {
        let entry: StartEntry = serde_json::from_str(
            r#"{
                "startNumber": {"value": 2},
                "horse": "Bold Eagle",
                "driver": {"name": 5},
                "trainer": ["Daniel Redén"],
                "scratched": "yes"
            }"#,
        )
        .unwrap();
        assert_eq!(entry.to_row().fields(), ["", "", "", "5", ""]);
        assert!(!entry.scratched);
    }

    #[test]
    fn test_driver_and_trainer_from_name_parts() {
        let entry: StartEntry = serde_json::from_str(
            r#"{
                "number": 4,
                "driver": {"firstName": "Björn", "lastName": "Goop"},
                "horse": {"name": "Hail Mary", "trainer": {"firstName": "Stefan", "lastName": "Melander"}}
            }"#,
        )
        .unwrap();
        let row = entry.to_row();
        assert_eq!(row.driver, "Björn Goop");
        assert_eq!(row.trainer, "Stefan Melander");
    }

    #[test]
    fn test_top_level_trainer_wins_over_horse_trainer() {
        let entry: StartEntry = serde_json::from_str(
            r#"{
                "trainer": {"name": "Top Level"},
                "horse": {"trainer": {"name": "Nested"}}
            }"#,
        )
        .unwrap();
        assert_eq!(entry.to_row().trainer, "Top Level");
    }

    #[test]
    fn test_game_detail_races() {
        let detail: GameDetail = serde_json::from_str(
            r#"{
                "id": "V75_2025-05-10_5_5",
                "races": [
                    {"id": "2025-05-10_5_5", "number": 5, "starts": [{"startNumber": 1}, {"startNumber": 2}]},
                    {"number": 6}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(detail.races.len(), 2);
        assert_eq!(detail.races[0].number, 5);
        assert_eq!(detail.races[0].starts.len(), 2);
        assert_eq!(detail.races[1].number, 6);
        assert!(detail.races[1].starts.is_empty());
    }

    #[test]
    fn test_race_with_numeric_id() {
        let race: Race =
            serde_json::from_str(r#"{"id": 55, "number": 1, "name": null, "starts": []}"#).unwrap();
        assert_eq!(race.id.as_deref(), Some("55"));
        assert!(race.name.is_none());
    }

    #[test]
    fn test_game_detail_without_races() {
        let detail: GameDetail = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert!(detail.races.is_empty());

        let detail: GameDetail = serde_json::from_str(r#"{"races": null}"#).unwrap();
        assert!(detail.races.is_empty());
    }
}
