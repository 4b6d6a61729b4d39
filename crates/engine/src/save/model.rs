use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::party::{Member, Party, StateId};
use crate::world::GameWorld;

/// On-disk save format version. Bump when the shape below changes.
pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedMember {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    #[serde(default)]
    pub states: Vec<StateId>,
}

impl SavedMember {
    fn from_member(member: &Member) -> Self {
        Self {
            name: member.name().to_string(),
            hp: member.hp(),
            max_hp: member.max_hp(),
            states: member.states().to_vec(),
        }
    }

    fn to_member(&self) -> Member {
        let mut member = Member::new(self.name.clone(), self.max_hp);
        member.set_hp(self.hp);
        for state in &self.states {
            member.add_state(*state);
        }
        member
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveGame {
    pub save_version: u32,
    pub version_id: u64,
    pub map_id: u32,
    pub player_x: i32,
    pub player_y: i32,
    pub party: Vec<SavedMember>,
}

impl SaveGame {
    pub fn from_world(world: &GameWorld) -> Self {
        let (player_x, player_y) = world.map.player_position();
        Self {
            save_version: SAVE_VERSION,
            version_id: world.system.version_id(),
            map_id: world.map.map_id(),
            player_x,
            player_y,
            party: world.party.members().iter().map(SavedMember::from_member).collect(),
        }
    }

    /// Replaces the world's party, map position and stored content version
    /// with this save's data. Reserved events and screen state are untouched.
    pub fn apply_to_world(&self, world: &mut GameWorld) {
        world.party = Party::new(self.party.iter().map(SavedMember::to_member).collect());
        world.map.set_position(self.map_id, self.player_x, self.player_y);
        world.system.set_version_id(self.version_id);
    }
}

fn validation_err(path: &str, message: impl Into<String>) -> String {
    format!("validation failed at {path}: {}", message.into())
}

fn expected_actual(path: &str, expected: impl Display, actual: impl Display) -> String {
    validation_err(path, format!("expected {expected}, got {actual}"))
}

pub(crate) fn validate_save_game(save: &SaveGame) -> Result<(), String> {
    if save.save_version != SAVE_VERSION {
        return Err(expected_actual(
            "save_version",
            SAVE_VERSION,
            save.save_version,
        ));
    }
    if save.party.is_empty() {
        return Err(validation_err("party", "expected at least one member"));
    }
    for (index, member) in save.party.iter().enumerate() {
        if member.max_hp == 0 {
            let path = format!("party[{index}].max_hp");
            return Err(expected_actual(&path, ">= 1", member.max_hp));
        }
        if member.hp > member.max_hp {
            let path = format!("party[{index}].hp");
            return Err(expected_actual(
                &path,
                format!("<= max_hp {}", member.max_hp),
                member.hp,
            ));
        }
        if member.name.is_empty() {
            let path = format!("party[{index}].name");
            return Err(validation_err(&path, "expected a non-empty name"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_save() -> SaveGame {
        SaveGame {
            save_version: SAVE_VERSION,
            version_id: 3,
            map_id: 12,
            player_x: 5,
            player_y: -2,
            party: vec![SavedMember {
                name: "Avery".to_string(),
                hp: 10,
                max_hp: 50,
                states: vec![StateId(4)],
            }],
        }
    }

    #[test]
    fn valid_save_passes_validation() {
        assert!(validate_save_game(&sample_save()).is_ok());
    }

    #[test]
    fn wrong_save_version_is_rejected() {
        let mut save = sample_save();
        save.save_version = SAVE_VERSION + 1;
        let error = validate_save_game(&save).expect_err("err");
        assert!(error.contains("save_version"));
    }

    #[test]
    fn empty_party_is_rejected() {
        let mut save = sample_save();
        save.party.clear();
        let error = validate_save_game(&save).expect_err("err");
        assert!(error.contains("party"));
    }

    #[test]
    fn hp_over_max_is_rejected() {
        let mut save = sample_save();
        save.party[0].hp = 60;
        let error = validate_save_game(&save).expect_err("err");
        assert!(error.contains("party[0].hp"));
    }

    #[test]
    fn round_trip_through_world_preserves_party_and_position() {
        let mut world = GameWorld::new(Party::new(vec![Member::new("Avery", 50)]), 3);
        world.map.set_position(12, 5, -2);
        world.party.members_mut()[0].set_hp(10);
        world.party.members_mut()[0].add_state(StateId(4));

        let save = SaveGame::from_world(&world);
        assert_eq!(save, sample_save());

        let mut restored = GameWorld::new(Party::default(), 3);
        save.apply_to_world(&mut restored);
        assert_eq!(restored.party, world.party);
        assert_eq!(restored.map.map_id(), 12);
        assert_eq!(restored.map.player_position(), (5, -2));
        assert_eq!(restored.system.version_id(), 3);
    }
}
