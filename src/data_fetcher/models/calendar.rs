use super::common::GameId;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One game listed in the day calendar. Only the id is read; every other
/// field the API sends is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSummary {
    pub id: GameId,
}

/// Games of one day grouped by game-type label, in the order the API
/// listed the labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameGroups(Vec<(String, Vec<GameSummary>)>);

impl GameGroups {
    /// Iterates `(label, games)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[GameSummary])> {
        self.0
            .iter()
            .map(|(label, games)| (label.as_str(), games.as_slice()))
    }

    /// Games listed under `label`, compared exactly.
    #[cfg(test)]
    pub(crate) fn get(&self, label: &str) -> Option<&[GameSummary]> {
        self.0
            .iter()
            .find(|(candidate, _)| candidate == label)
            .map(|(_, games)| games.as_slice())
    }

    pub fn labels(&self) -> Vec<&str> {
        self.0.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for GameGroups {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GameGroupsVisitor;

        impl<'de> Visitor<'de> for GameGroupsVisitor {
            type Value = GameGroups;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map from game type to a list of games")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((label, games)) =
                    map.next_entry::<String, Option<Vec<GameSummary>>>()?
                {
                    groups.push((label, games.unwrap_or_default()));
                }
                Ok(GameGroups(groups))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(GameGroups::default())
            }
        }

        deserializer.deserialize_any(GameGroupsVisitor)
    }
}

/// Response of `GET /calendar/day/{date}`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CalendarResponse {
    #[serde(default)]
    pub games: GameGroups,
}
