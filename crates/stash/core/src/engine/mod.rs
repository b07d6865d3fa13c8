//! Transfer execution pipeline.
//!
//! The [`TransferEngine`] is the only path by which player state changes. It
//! resolves a command, applies the chosen action to a staged copy of the
//! player, recomputes stats, checks every post-condition, and only then
//! commits. A command therefore either takes full effect or none at all.

mod errors;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use tracing::{debug, error, info, warn};

use crate::action::{
    Action, Command, NoOpReason, RejectReason, Resolution, ResolveInput, TransferOutcome,
    TransferRequest, UnresolvedReason, apply, resolve,
};
use crate::config::{EngineConfig, InvariantPolicy};
use crate::env::{ItemOracle, OracleError, TransferEnv};
use crate::error::GameError;
use crate::slot::{SlotError, SlotId, WeaponSlot};
use crate::state::{InvariantViolation, PlayerState, StateDelta};

/// Complete result of one command.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionReport {
    pub outcome: TransferOutcome,

    /// Which player fields changed. Empty unless the outcome is `Applied`.
    pub delta: StateDelta,

    /// Gold held once the command finished.
    pub gold: u64,
}

impl ExecutionReport {
    fn unchanged(outcome: TransferOutcome, gold: u64) -> Self {
        Self {
            outcome,
            delta: StateDelta::empty(),
            gold,
        }
    }
}

pub struct TransferEngine<'a> {
    player: &'a mut PlayerState,
    config: EngineConfig,
}

impl<'a> TransferEngine<'a> {
    pub fn new(player: &'a mut PlayerState, config: EngineConfig) -> Self {
        Self { player, config }
    }

    pub fn player(&self) -> &PlayerState {
        self.player
    }

    /// Resolves and executes one command.
    ///
    /// Rejections, no-ops and unresolved drops are `Ok` and leave the player
    /// unchanged. `Err` means an internal fault; the player is also unchanged.
    ///
    /// # Panics
    ///
    /// Under [`InvariantPolicy::FailFast`], a failed post-condition panics.
    pub fn execute(
        &mut self,
        env: TransferEnv<'_>,
        command: &Command,
    ) -> Result<ExecutionReport, ExecuteError> {
        match command {
            Command::Transfer(request) => self.transfer(env, request),
            Command::SelectWeapon(slot) => self.select_weapon(env, *slot),
        }
    }

    /// Executes a transfer addressed by textual slot identities.
    ///
    /// Unparseable identities produce an `UnknownSlot` outcome rather than an
    /// error.
    pub fn transfer_named(
        &mut self,
        env: TransferEnv<'_>,
        source: &str,
        target: &str,
    ) -> Result<ExecutionReport, ExecuteError> {
        match TransferRequest::parse(source, target) {
            Ok(request) => self.transfer(env, &request),
            Err(SlotError::UnknownSlot(raw)) => {
                warn!(slot = %raw, "transfer names an unknown slot");
                Ok(ExecutionReport::unchanged(
                    TransferOutcome::Unresolved(UnresolvedReason::UnknownSlot(raw)),
                    self.player.gold,
                ))
            }
        }
    }

    pub fn transfer(
        &mut self,
        env: TransferEnv<'_>,
        request: &TransferRequest,
    ) -> Result<ExecutionReport, ExecuteError> {
        let input = self
            .gather(env, request)
            .map_err(|err| ExecuteError::oracle(TransitionPhase::Resolve, err))?;
        let resolution = resolve(self.player, &input, self.config.requirement_rule);
        self.finish(env, resolution)
    }

    pub fn select_weapon(
        &mut self,
        env: TransferEnv<'_>,
        slot: WeaponSlot,
    ) -> Result<ExecutionReport, ExecuteError> {
        let equipment = &self.player.equipment;
        let resolution = if equipment.weapon(slot).is_none() {
            Resolution::Reject(RejectReason::EmptyWeaponSlot)
        } else if equipment.equipped_weapon == Some(slot) {
            Resolution::NoOp(NoOpReason::AlreadyEquipped)
        } else {
            Resolution::Apply(Action::SelectWeapon { slot })
        };
        self.finish(env, resolution)
    }

    /// Looks up the definitions the resolver needs.
    fn gather<'e>(
        &self,
        env: TransferEnv<'e>,
        request: &TransferRequest,
    ) -> Result<ResolveInput<'e>, OracleError> {
        let source_handle = match request.source {
            SlotId::Store(offer) => env.store()?.offer(offer),
            slot => self.player.item_at(slot).map(|item| item.handle),
        };
        let target_handle = self.player.item_at(request.target).map(|item| item.handle);

        Ok(ResolveInput {
            request: *request,
            source_item: source_handle
                .map(|handle| env.definition(handle))
                .transpose()?,
            target_item: target_handle
                .map(|handle| env.definition(handle))
                .transpose()?,
        })
    }

    fn finish(
        &mut self,
        env: TransferEnv<'_>,
        resolution: Resolution,
    ) -> Result<ExecutionReport, ExecuteError> {
        match resolution {
            Resolution::Apply(action) => self.commit(env, action),
            Resolution::Reject(reason) => {
                debug!(%reason, "transfer rejected");
                Ok(ExecutionReport::unchanged(
                    TransferOutcome::Rejected(reason),
                    self.player.gold,
                ))
            }
            Resolution::NoOp(reason) => {
                debug!(%reason, "transfer ignored");
                Ok(ExecutionReport::unchanged(
                    TransferOutcome::NoOp(reason),
                    self.player.gold,
                ))
            }
            Resolution::Unresolved(reason) => {
                warn!(%reason, "transfer unresolved");
                Ok(ExecutionReport::unchanged(
                    TransferOutcome::Unresolved(reason),
                    self.player.gold,
                ))
            }
        }
    }

    /// Applies `action` to a staged copy and commits it if every check passes.
    fn commit(
        &mut self,
        env: TransferEnv<'_>,
        action: Action,
    ) -> Result<ExecutionReport, ExecuteError> {
        let items = env
            .items()
            .map_err(|err| ExecuteError::oracle(TransitionPhase::Apply, err))?;

        let mut staged = self.player.clone();
        apply(&mut staged, &action).map_err(|err| self.internal(ExecuteError::apply(err)))?;

        staged
            .recompute_stats(items)
            .map_err(|err| ExecuteError::oracle(TransitionPhase::PostValidate, err))?;
        self.post_validate(&staged, &action, items)
            .map_err(|err| self.internal(ExecuteError::invariant(err)))?;

        let touched = action.slots().into_iter().flatten();
        let delta = StateDelta::from_states(self.player, &staged, touched);
        *self.player = staged;

        info!(
            action = action.as_str(),
            fields = ?delta.fields,
            gold = self.player.gold,
            "transfer applied"
        );

        Ok(ExecutionReport {
            outcome: TransferOutcome::Applied(action),
            delta,
            gold: self.player.gold,
        })
    }

    fn post_validate(
        &self,
        staged: &PlayerState,
        action: &Action,
        items: &dyn ItemOracle,
    ) -> Result<(), InvariantViolation> {
        if !action.moves_gold() && staged.gold != self.player.gold {
            return Err(InvariantViolation::GoldChanged {
                before: self.player.gold,
                after: staged.gold,
            });
        }
        staged.validate(items)
    }

    /// Applies the configured policy to an internal fault.
    fn internal(&self, err: ExecuteError) -> ExecuteError {
        match self.config.invariant_policy {
            InvariantPolicy::FailFast => panic!("transfer engine fault: {err}"),
            InvariantPolicy::Revert => {
                let slot = err.as_invariant_violation().and_then(InvariantViolation::slot);
                error!(
                    %err,
                    code = err.error_code(),
                    slot = ?slot,
                    "staged transfer discarded"
                );
                err
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ArmorType, Env, ItemClass, ItemDefinition, StoreOracle};
    use crate::slot::EquipSlot;
    use crate::state::{Attributes, ItemHandle};

    struct Catalog(Vec<ItemDefinition>);

    impl ItemOracle for Catalog {
        fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
            self.0.iter().find(|item| item.handle == handle)
        }

        fn all_definitions(&self) -> Vec<&ItemDefinition> {
            self.0.iter().collect()
        }
    }

    struct Shelf(Vec<ItemHandle>);

    impl StoreOracle for Shelf {
        fn offer(&self, index: u16) -> Option<ItemHandle> {
            self.0.get(index as usize).copied()
        }

        fn len(&self) -> usize {
            self.0.len()
        }
    }

    fn catalog() -> Catalog {
        Catalog(vec![
            ItemDefinition::new(ItemHandle(1), "Sword", ItemClass::Weapon).with_values(50, 20),
            ItemDefinition::new(ItemHandle(2), "Cap", ItemClass::Armor(ArmorType::Head))
                .with_values(30, 10),
        ])
    }

    fn reverting() -> EngineConfig {
        EngineConfig::new().with_invariant_policy(InvariantPolicy::Revert)
    }

    #[test]
    fn purchase_reports_gold_and_inventory_delta() {
        let catalog = catalog();
        let shelf = Shelf(vec![ItemHandle(1)]);
        let env = Env::with_all(&catalog, &shelf).as_transfer_env();
        let mut player = PlayerState::new(100, 1, Attributes::new(1, 1, 1));

        let report = TransferEngine::new(&mut player, reverting())
            .transfer_named(env, "store:0", "inventory:0")
            .unwrap();

        assert!(report.outcome.is_applied());
        assert!(report.delta.fields.contains(crate::state::PlayerFields::GOLD));
        assert!(report.delta.fields.contains(crate::state::PlayerFields::INVENTORY));
        assert_eq!(player.gold, 50);
    }

    #[test]
    fn delta_names_the_slot_a_purchase_landed_in() {
        let catalog = catalog();
        let shelf = Shelf(vec![ItemHandle(1)]);
        let env = Env::with_all(&catalog, &shelf).as_transfer_env();
        let mut player = PlayerState::new(100, 1, Attributes::new(1, 1, 1));
        let cap = player.allocate_instance(ItemHandle(2));
        player.inventory.put(3, cap).unwrap();

        let report = TransferEngine::new(&mut player, reverting())
            .transfer_named(env, "store:0", "inventory:3")
            .unwrap();

        assert!(matches!(
            report.outcome,
            TransferOutcome::Applied(Action::Purchase { to: 0, .. })
        ));
        assert_eq!(
            report.delta.touched.as_slice(),
            &[SlotId::Store(0), SlotId::Inventory(0)]
        );
        assert_eq!(player.inventory.get(3), Some(cap));
        assert!(player.inventory.get(0).is_some());
        assert_eq!(report.gold, 50);
    }

    #[test]
    fn deposits_touch_the_new_stash_entry() {
        let catalog = catalog();
        let shelf = Shelf(vec![]);
        let env = Env::with_all(&catalog, &shelf).as_transfer_env();
        let mut player = PlayerState::default();
        let stored = player.allocate_instance(ItemHandle(2));
        player.stash.push(stored);
        let sword = player.allocate_instance(ItemHandle(1));
        player.inventory.put(4, sword).unwrap();

        let report = TransferEngine::new(&mut player, reverting())
            .transfer_named(env, "inventory:4", "stash")
            .unwrap();

        assert_eq!(
            report.delta.touched.as_slice(),
            &[SlotId::Inventory(4), SlotId::Stash(1)]
        );
        assert_eq!(player.stash.get(1), Some(sword));
    }

    #[test]
    fn unchanged_reports_carry_current_gold() {
        let catalog = catalog();
        let shelf = Shelf(vec![ItemHandle(1)]);
        let env = Env::with_all(&catalog, &shelf).as_transfer_env();
        let mut player = PlayerState::new(40, 1, Attributes::new(1, 1, 1));

        let report = TransferEngine::new(&mut player, reverting())
            .transfer_named(env, "store:0", "inventory:0")
            .unwrap();

        assert!(matches!(
            report.outcome,
            TransferOutcome::Rejected(RejectReason::InsufficientGold { .. })
        ));
        assert_eq!(report.gold, 40);
        assert!(report.delta.touched.is_empty());
    }

    #[test]
    fn unknown_slot_names_are_unresolved() {
        let catalog = catalog();
        let shelf = Shelf(vec![]);
        let env = Env::with_all(&catalog, &shelf).as_transfer_env();
        let mut player = PlayerState::default();

        let report = TransferEngine::new(&mut player, reverting())
            .transfer_named(env, "inventory:0", "backpack")
            .unwrap();

        assert_eq!(
            report.outcome,
            TransferOutcome::Unresolved(UnresolvedReason::UnknownSlot("backpack".into()))
        );
        assert!(report.delta.is_empty());
    }

    #[test]
    fn corrupted_state_is_reverted() {
        let catalog = catalog();
        let shelf = Shelf(vec![]);
        let env = Env::with_all(&catalog, &shelf).as_transfer_env();
        let mut player = PlayerState::default();
        let cap = player.allocate_instance(ItemHandle(2));
        player.equipment.replace(EquipSlot::Weapon1, cap);
        let sword = player.allocate_instance(ItemHandle(1));
        player.inventory.put(0, sword).unwrap();
        let before = player.clone();

        let err = TransferEngine::new(&mut player, reverting())
            .transfer_named(env, "inventory:0", "inventory:1")
            .unwrap_err();

        assert_eq!(err.phase(), TransitionPhase::PostValidate);
        let violation = err.as_invariant_violation().expect("post-validation fault");
        assert!(matches!(violation, InvariantViolation::NonWeaponInWeaponSlot { .. }));
        assert_eq!(violation.slot(), Some(EquipSlot::Weapon1));
        assert_eq!(player, before);
    }

    #[test]
    #[should_panic(expected = "transfer engine fault")]
    fn fail_fast_panics_on_violation() {
        let catalog = catalog();
        let shelf = Shelf(vec![]);
        let env = Env::with_all(&catalog, &shelf).as_transfer_env();
        let mut player = PlayerState::default();
        let cap = player.allocate_instance(ItemHandle(2));
        player.equipment.replace(EquipSlot::Chest, cap);
        let sword = player.allocate_instance(ItemHandle(1));
        player.inventory.put(0, sword).unwrap();

        let config = EngineConfig::new().with_invariant_policy(InvariantPolicy::FailFast);
        let _ = TransferEngine::new(&mut player, config).transfer_named(env, "inventory:0", "inventory:1");
    }

    #[test]
    fn selecting_weapons() {
        let catalog = catalog();
        let shelf = Shelf(vec![]);
        let env = Env::with_all(&catalog, &shelf).as_transfer_env();
        let mut player = PlayerState::default();
        let sword = player.allocate_instance(ItemHandle(1));
        player.equipment.replace(EquipSlot::Weapon2, sword);

        let mut engine = TransferEngine::new(&mut player, reverting());
        assert_eq!(
            engine.select_weapon(env, WeaponSlot::Weapon1).unwrap().outcome,
            TransferOutcome::Rejected(RejectReason::EmptyWeaponSlot)
        );
        let report = engine.select_weapon(env, WeaponSlot::Weapon2).unwrap();
        assert!(report.delta.fields.contains(crate::state::PlayerFields::EQUIPPED_WEAPON));
        assert_eq!(
            engine.select_weapon(env, WeaponSlot::Weapon2).unwrap().outcome,
            TransferOutcome::NoOp(NoOpReason::AlreadyEquipped)
        );
    }
}
