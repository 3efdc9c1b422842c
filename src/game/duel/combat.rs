// Hit resolution between the two fighters

use crate::engine::physics::overlaps;
use crate::game::characters::{AttackSlot, Fighter};

/// Extra health lost when the second attack lands, on top of the base hit
pub const SECOND_ATTACK_BONUS: i32 = 5;

/// A landed attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    /// Index of the fighter that landed the attack
    pub attacker: usize,
    /// Index of the fighter that was hit
    pub defender: usize,
    pub slot: AttackSlot,
}

/// Land `slot` on `defender` if the attack is live, on its impact frame and
/// the hitbox touches the defender's body. Returns whether it landed.
pub fn try_strike(attacker: &mut Fighter, defender: &mut Fighter, slot: AttackSlot) -> bool {
    let landed = overlaps(&attacker.attack_rect(), &defender.body_rect())
        && attacker.is_attacking(slot)
        && attacker.at_impact_frame();
    if !landed {
        return false;
    }

    defender.take_hit();
    attacker.clear_attack(slot);
    if slot == AttackSlot::Second {
        defender.lose_health(SECOND_ATTACK_BONUS);
    }

    true
}

/// Run every hit check for one tick: the first fighter's attacks, then the
/// second's, each in slot order.
pub fn exchange(fighters: &mut [Fighter; 2]) -> Vec<Strike> {
    let mut strikes = Vec::new();
    let [one, two] = fighters;

    for slot in AttackSlot::ALL {
        if try_strike(one, two, slot) {
            strikes.push(Strike {
                attacker: 0,
                defender: 1,
                slot,
            });
        }
    }
    for slot in AttackSlot::ALL {
        if try_strike(two, one, slot) {
            strikes.push(Strike {
                attacker: 1,
                defender: 0,
                slot,
            });
        }
    }

    strikes
}

/// Drop attack flags that can no longer land: the impact frame has passed
/// without contact, or the attack clip is on its last frame.
pub fn expire_attacks(fighter: &mut Fighter) {
    for slot in AttackSlot::ALL {
        if fighter.is_attacking(slot)
            && (fighter.at_impact_frame() || fighter.is_finishing(slot.clip()))
        {
            fighter.clear_attack(slot);
        }
    }
}
