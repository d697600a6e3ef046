//! Stage machine: interactive sub-phases opened by action cards.
//!
//! Playing certain action cards suspends the main turn and opens a named
//! stage. While a stage is open only the players listed in the cursor may
//! act, and only with the moves on that stage's menu. A successful stage
//! move closes the stage and hands control back to the current player.
//!
//! | Stage | Opened by | Who acts | Menu |
//! |---|---|---|---|
//! | `selectDebtTarget` | debt collection, 2+ opponents | collector | `selectDebtTarget` |
//! | `payingDebt` | debt collection | debtor | `payDebt`, `skipPayment` |
//! | `payingBirthday` | birthday | every opponent | `payBirthday` |
//! | `selectPropertySet` | steal set | current player | `selectSetToSteal` |
//! | `selectSingleProperty` | steal property | current player | `selectPropertyToSteal` |
//! | `selectPropertiesForSwap` | swap | current player | `selectPropertySwap` |
//! | `respondToAction` | host response window | responder | `playJustSayNo`, `acceptAction` |

mod machine;

pub(crate) use machine::{
    accept_action, open_response_window, pay_birthday, pay_debt, play_just_say_no, route_action,
    select_debt_target, select_property_swap, select_property_to_steal, select_set_to_steal,
    skip_payment,
};

use serde::{Deserialize, Serialize};

use crate::core::action::Move;

/// Named interactive stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    SelectDebtTarget,
    PayingDebt,
    PayingBirthday,
    SelectPropertySet,
    SelectSingleProperty,
    SelectPropertiesForSwap,
    RespondToAction,
}

impl Stage {
    /// Wire name of the stage.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Stage::SelectDebtTarget => "selectDebtTarget",
            Stage::PayingDebt => "payingDebt",
            Stage::PayingBirthday => "payingBirthday",
            Stage::SelectPropertySet => "selectPropertySet",
            Stage::SelectSingleProperty => "selectSingleProperty",
            Stage::SelectPropertiesForSwap => "selectPropertiesForSwap",
            Stage::RespondToAction => "respondToAction",
        }
    }

    /// Move names on this stage's menu.
    #[must_use]
    pub const fn menu(self) -> &'static [&'static str] {
        match self {
            Stage::SelectDebtTarget => &["selectDebtTarget"],
            Stage::PayingDebt => &["payDebt", "skipPayment"],
            Stage::PayingBirthday => &["payBirthday"],
            Stage::SelectPropertySet => &["selectSetToSteal"],
            Stage::SelectSingleProperty => &["selectPropertyToSteal"],
            Stage::SelectPropertiesForSwap => &["selectPropertySwap"],
            Stage::RespondToAction => &["playJustSayNo", "acceptAction"],
        }
    }

    /// Is `mv` on this stage's menu?
    #[must_use]
    pub fn permits(self, mv: &Move) -> bool {
        matches!(
            (self, mv),
            (Stage::SelectDebtTarget, Move::SelectDebtTarget { .. })
                | (Stage::PayingDebt, Move::PayDebt { .. } | Move::SkipPayment)
                | (Stage::PayingBirthday, Move::PayBirthday { .. })
                | (Stage::SelectPropertySet, Move::SelectSetToSteal { .. })
                | (Stage::SelectSingleProperty, Move::SelectPropertyToSteal { .. })
                | (Stage::SelectPropertiesForSwap, Move::SelectPropertySwap { .. })
                | (Stage::RespondToAction, Move::PlayJustSayNo | Move::AcceptAction)
        )
    }

    /// Stages where the current player is choosing a target and may give
    /// up by ending the turn.
    #[must_use]
    pub const fn is_selection(self) -> bool {
        matches!(
            self,
            Stage::SelectDebtTarget
                | Stage::SelectPropertySet
                | Stage::SelectSingleProperty
                | Stage::SelectPropertiesForSwap
        )
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Moves available in the main turn, outside any stage.
pub const MAIN_MENU: [&str; 4] = ["playMoney", "playProperty", "playAction", "endTurn"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;
    use crate::core::PlayerId;

    const ALL: [Stage; 7] = [
        Stage::SelectDebtTarget,
        Stage::PayingDebt,
        Stage::PayingBirthday,
        Stage::SelectPropertySet,
        Stage::SelectSingleProperty,
        Stage::SelectPropertiesForSwap,
        Stage::RespondToAction,
    ];

    fn sample_moves() -> Vec<Move> {
        vec![
            Move::PlayMoney { card_index: 0 },
            Move::EndTurn,
            Move::SelectDebtTarget { target: PlayerId::new(1) },
            Move::pay_debt(&[0]),
            Move::SkipPayment,
            Move::pay_birthday(&[0]),
            Move::SelectSetToSteal { target: PlayerId::new(1), color: Color::Red },
            Move::SelectPropertyToSteal {
                target: PlayerId::new(1),
                color: Color::Red,
                property_index: 0,
            },
            Move::SelectPropertySwap {
                my_color: Color::Red,
                my_index: 0,
                target: PlayerId::new(1),
                their_color: Color::Pink,
                their_index: 0,
            },
            Move::PlayJustSayNo,
            Move::AcceptAction,
        ]
    }

    #[test]
    fn test_permits_agrees_with_menu() {
        for stage in ALL {
            for mv in sample_moves() {
                assert_eq!(
                    stage.permits(&mv),
                    stage.menu().contains(&mv.name()),
                    "{stage} / {}",
                    mv.name()
                );
            }
        }
    }

    #[test]
    fn test_main_moves_never_in_stages() {
        for stage in ALL {
            assert!(!stage.permits(&Move::PlayMoney { card_index: 0 }));
            assert!(!stage.permits(&Move::EndTurn));
        }
    }

    #[test]
    fn test_display_uses_wire_name() {
        assert_eq!(Stage::SelectPropertiesForSwap.to_string(), "selectPropertiesForSwap");
        assert_eq!(
            serde_json::to_string(&Stage::PayingBirthday).unwrap(),
            "\"payingBirthday\""
        );
    }

    #[test]
    fn test_selection_stages() {
        assert!(Stage::SelectDebtTarget.is_selection());
        assert!(!Stage::PayingDebt.is_selection());
        assert!(!Stage::PayingBirthday.is_selection());
        assert!(!Stage::RespondToAction.is_selection());
    }
}
