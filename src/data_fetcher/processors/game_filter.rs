//! Game-type filtering of a day's calendar

use crate::data_fetcher::models::{GameGroups, GameSummary};

/// A calendar game kept by the filter, together with the label it was
/// listed under. The label keeps the API's casing and ends up in the
/// output file names.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedGame {
    pub game_type: String,
    pub summary: GameSummary,
}

/// Returns true when `label` matches an allow-list entry, ignoring case.
///
/// Entries are expected uppercased (the config does that on load); the
/// label is uppercased before comparing.
pub fn is_allowed_game_type(label: &str, allowed: &[String]) -> bool {
    let upper = label.to_uppercase();
    allowed.iter().any(|game_type| *game_type == upper)
}

/// Flattens the calendar groups whose label is on the allow-list.
///
/// Labels are visited in calendar order and games keep their order
/// within a label.
pub fn filter_games_by_type(groups: &GameGroups, allowed: &[String]) -> Vec<TaggedGame> {
    groups
        .iter()
        .filter(|(label, _)| is_allowed_game_type(label, allowed))
        .flat_map(|(label, games)| {
            games.iter().map(move |summary| TaggedGame {
                game_type: label.to_string(),
                summary: summary.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{CalendarResponse, GameId};

    fn allow(types: &[&str]) -> Vec<String> {
        types.iter().map(|t| t.to_string()).collect()
    }

    fn groups(json: &str) -> GameGroups {
        serde_json::from_str::<CalendarResponse>(json).unwrap().games
    }

    fn ids(games: &[TaggedGame]) -> Vec<&str> {
        games.iter().map(|g| g.summary.id.as_str()).collect()
    }

    #[test]
    fn test_only_allowed_types_are_kept() {
        let groups = groups(r#"{"games": {"V75": [{"id": "123"}], "V86": [{"id": "999"}]}}"#);
        let games = filter_games_by_type(&groups, &allow(&["V75"]));

        assert_eq!(games.len(), 1);
        assert_eq!(games[0].game_type, "V75");
        assert_eq!(games[0].summary.id, GameId::from("123"));
    }

    #[test]
    fn test_label_case_is_ignored_and_preserved() {
        let groups = groups(r#"{"games": {"v75": [{"id": "1"}], "Gs75": [{"id": "2"}]}}"#);
        let games = filter_games_by_type(&groups, &allow(&["V75", "GS75"]));

        assert_eq!(ids(&games), vec!["1", "2"]);
        assert_eq!(games[0].game_type, "v75");
        assert_eq!(games[1].game_type, "Gs75");
    }

    #[test]
    fn test_order_follows_calendar_then_source() {
        let groups = groups(
            r#"{"games": {
                "GS75": [{"id": "g1"}, {"id": "g2"}],
                "vinnare": [{"id": "w1"}],
                "V75": [{"id": "v1"}, {"id": "v2"}, {"id": "v3"}]
            }}"#,
        );
        // Allow-list order does not matter
        let games = filter_games_by_type(&groups, &allow(&["V75", "GS75"]));
        assert_eq!(ids(&games), vec!["g1", "g2", "v1", "v2", "v3"]);
    }

    #[test]
    fn test_nothing_matches() {
        let groups = groups(r#"{"games": {"vinnare": [{"id": "1"}], "plats": [{"id": "2"}]}}"#);
        assert!(filter_games_by_type(&groups, &allow(&["V75"])).is_empty());
        assert!(filter_games_by_type(&GameGroups::default(), &allow(&["V75"])).is_empty());
    }

    #[test]
    fn test_empty_allow_list_keeps_nothing() {
        let groups = groups(r#"{"games": {"V75": [{"id": "1"}]}}"#);
        assert!(filter_games_by_type(&groups, &[]).is_empty());
    }

    #[test]
    fn test_fetched_record_is_not_modified() {
        let groups = groups(r#"{"games": {"V75": [{"id": "1", "status": "bettable"}]}}"#);
        let games = filter_games_by_type(&groups, &allow(&["V75"]));
        assert_eq!(&games[0].summary, &groups.get("V75").unwrap()[0]);
    }

    #[test]
    fn test_is_allowed_game_type() {
        let allowed = allow(&["V75", "V86"]);
        assert!(is_allowed_game_type("v86", &allowed));
        assert!(is_allowed_game_type("V75", &allowed));
        assert!(!is_allowed_game_type("V75 ", &allowed));
        assert!(!is_allowed_game_type("V7", &allowed));
    }
}
