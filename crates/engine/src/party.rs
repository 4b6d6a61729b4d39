use serde::{Deserialize, Serialize};

/// Identifier of a status condition. The meaning of each id belongs to the
/// game's database; the engine only carries and clears them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateId(pub u16);

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    name: String,
    hp: u32,
    max_hp: u32,
    states: Vec<StateId>,
}

impl Member {
    pub fn new(name: impl Into<String>, max_hp: u32) -> Self {
        let max_hp = max_hp.max(1);
        Self {
            name: name.into(),
            hp: max_hp,
            max_hp,
            states: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.max_hp);
    }

    pub fn states(&self) -> &[StateId] {
        &self.states
    }

    pub fn add_state(&mut self, state: StateId) {
        if !self.states.contains(&state) {
            self.states.push(state);
        }
    }

    pub fn clear_states(&mut self) {
        self.states.clear();
    }

    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Party {
    members: Vec<Member>,
}

impl Party {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [Member] {
        &mut self.members
    }

    /// The first member; the one revived on custom continuation paths.
    pub fn leader(&self) -> Option<&Member> {
        self.members.first()
    }

    pub fn leader_mut(&mut self) -> Option<&mut Member> {
        self.members.first_mut()
    }

    /// An empty roster never counts as defeated.
    pub fn is_all_dead(&self) -> bool {
        !self.members.is_empty() && self.members.iter().all(Member::is_dead)
    }

    /// Guarded revive: a no-op unless the whole party is currently down.
    /// On success the leader ends at exactly 1 HP with no states.
    pub fn revive_leader(&mut self) -> bool {
        if !self.is_all_dead() {
            return false;
        }
        let Some(leader) = self.members.first_mut() else {
            return false;
        };
        leader.hp = 1;
        leader.states.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_member_party() -> Party {
        Party::new(vec![
            Member::new("Avery", 50),
            Member::new("Brook", 40),
            Member::new("Corin", 30),
        ])
    }

    fn wipe(party: &mut Party) {
        for member in party.members_mut() {
            member.set_hp(0);
        }
    }

    #[test]
    fn fresh_party_is_not_all_dead() {
        let party = three_member_party();
        assert!(!party.is_all_dead());
    }

    #[test]
    fn empty_roster_is_never_all_dead() {
        let mut party = Party::default();
        assert!(!party.is_all_dead());
        assert!(!party.revive_leader());
    }

    #[test]
    fn all_dead_requires_every_member_down() {
        let mut party = three_member_party();
        party.members_mut()[0].set_hp(0);
        party.members_mut()[1].set_hp(0);
        assert!(!party.is_all_dead());

        party.members_mut()[2].set_hp(0);
        assert!(party.is_all_dead());
    }

    #[test]
    fn revive_leader_is_a_noop_while_anyone_lives() {
        let mut party = three_member_party();
        party.members_mut()[0].set_hp(0);
        assert!(!party.revive_leader());
        assert_eq!(party.leader().expect("leader").hp(), 0);
    }

    #[test]
    fn revive_leader_sets_one_hp_and_clears_states() {
        let mut party = three_member_party();
        party.members_mut()[0].add_state(StateId(4));
        party.members_mut()[0].add_state(StateId(9));
        wipe(&mut party);

        assert!(party.revive_leader());
        let leader = party.leader().expect("leader");
        assert_eq!(leader.hp(), 1);
        assert!(leader.states().is_empty());
        assert!(!party.is_all_dead());
    }

    #[test]
    fn revive_leader_does_not_touch_other_members() {
        let mut party = three_member_party();
        wipe(&mut party);
        assert!(party.revive_leader());
        assert_eq!(party.members()[1].hp(), 0);
        assert_eq!(party.members()[2].hp(), 0);
    }

    #[test]
    fn set_hp_clamps_to_max() {
        let mut member = Member::new("Avery", 50);
        member.set_hp(90);
        assert_eq!(member.hp(), 50);
    }

    #[test]
    fn add_state_deduplicates() {
        let mut member = Member::new("Avery", 50);
        member.add_state(StateId(4));
        member.add_state(StateId(4));
        assert_eq!(member.states().len(), 1);
    }
}
