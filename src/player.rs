//! Player identities
//!
//! Bodies refer to players by `PlayerId`. Index 0 is always the
//! "not occupied" sentinel.

use serde::{Deserialize, Serialize};

/// RGBA colour, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const ANTIQUE_WHITE: Color = Color::rgb(250, 235, 215);
    pub const SKY_BLUE: Color = Color::rgb(135, 206, 235);
    pub const GOLD: Color = Color::rgb(255, 215, 0);
    pub const TOMATO: Color = Color::rgb(255, 99, 71);
    pub const LIME_GREEN: Color = Color::rgb(50, 205, 50);
    pub const ORCHID: Color = Color::rgb(218, 112, 214);
    pub const KHAKI: Color = Color::rgb(240, 230, 140);
}

/// Colours handed out to AI players in order, wrapping around
const AI_PALETTE: [Color; 4] = [
    Color::TOMATO,
    Color::LIME_GREEN,
    Color::ORCHID,
    Color::KHAKI,
];

/// Index into the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// The "not occupied" sentinel
    pub const UNOCCUPIED: PlayerId = PlayerId(0);
}

/// A player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub ai: bool,
    pub color: Color,
}

/// All players of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new("Player", 0)
    }
}

impl Roster {
    /// Sentinel, the human player, then `ai_count` AI players
    pub fn new(human_name: &str, ai_count: u32) -> Self {
        let mut players = vec![
            Player {
                id: PlayerId::UNOCCUPIED,
                name: "not occupied".to_string(),
                ai: false,
                color: Color::ANTIQUE_WHITE,
            },
            Player {
                id: PlayerId(1),
                name: human_name.to_string(),
                ai: false,
                color: Color::SKY_BLUE,
            },
        ];

        for n in 0..ai_count {
            players.push(Player {
                id: PlayerId(players.len() as u32),
                name: format!("AI {}", n + 1),
                ai: true,
                color: AI_PALETTE[n as usize % AI_PALETTE.len()],
            });
        }

        Self { players }
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.0 as usize)
    }

    /// Colour for a player, falling back to the sentinel's colour
    pub fn color_of(&self, id: PlayerId) -> Color {
        self.get(id)
            .map(|p| p.color)
            .unwrap_or(Color::ANTIQUE_WHITE)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_layout() {
        let roster = Roster::new("RagingDave", 2);
        assert_eq!(roster.len(), 4);

        let sentinel = roster.get(PlayerId::UNOCCUPIED).unwrap();
        assert_eq!(sentinel.name, "not occupied");
        assert_eq!(sentinel.color, Color::ANTIQUE_WHITE);

        let human = roster.get(PlayerId(1)).unwrap();
        assert_eq!(human.name, "RagingDave");
        assert!(!human.ai);

        let ais: Vec<_> = roster.iter().filter(|p| p.ai).collect();
        assert_eq!(ais.len(), 2);
        assert_eq!(ais[0].id, PlayerId(2));
        assert_ne!(ais[0].color, ais[1].color);
    }

    #[test]
    fn test_unknown_player_color_falls_back() {
        let roster = Roster::new("p", 0);
        assert_eq!(roster.color_of(PlayerId(99)), Color::ANTIQUE_WHITE);
        assert_eq!(roster.color_of(PlayerId(1)), Color::SKY_BLUE);
    }
}
