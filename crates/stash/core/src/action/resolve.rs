//! Priority-ordered transfer rules.
//!
//! Rules are evaluated top to bottom and the first match wins:
//!
//! | #  | source       | target            | result                         |
//! |----|--------------|-------------------|--------------------------------|
//! | 1  | store        | inventory         | purchase                       |
//! | 2  | store        | not store/sell    | reject `MustGoToInventory`     |
//! | 3  | any          | store             | no-op                          |
//! | 4  | store        | sell              | no-op                          |
//! | 5  | not inventory| sell              | reject `MustUnequipFirst`      |
//! | 6  | inventory    | sell              | sell                           |
//! | 7  | not inventory| stash             | reject `MustUnequipFirst`      |
//! | 8  | inventory    | stash             | deposit                        |
//! | 9  | stash        | not inventory     | reject `MustGoToInventoryFirst`|
//! | 10 | stash        | inventory         | withdraw                       |
//! | 11 | not equipment| equipment         | equip                          |
//! | 12 | weapon slot  | weapon slot       | equip (weapon swap)            |
//! | 13 | equipment    | trash             | discard equipped               |
//! | 14 | inventory    | trash             | discard inventory              |
//! | 15 | equipment    | not equipment     | unequip                        |
//! | 16 | inventory    | inventory         | sort                           |
//! | 17 | anything else|                   | unresolved                     |
//!
//! An empty source is unresolved before any rule is consulted.

use tracing::trace;

use super::{Action, NoOpReason, RejectReason, Resolution, TransferRequest, UnresolvedReason};
use crate::config::{EngineConfig, RequirementRule};
use crate::env::ItemDefinition;
use crate::requirements::can_equip;
use crate::slot::{ContainerKind, EquipSlot, SlotFamily, SlotId};
use crate::state::PlayerState;

/// Everything the resolver needs besides the player.
///
/// The engine looks up definitions before resolution so that the rules stay
/// free of oracle access.
#[derive(Clone, Copy, Debug)]
pub struct ResolveInput<'a> {
    pub request: TransferRequest,
    /// Definition of the dragged item (for store sources, the offered item).
    pub source_item: Option<&'a ItemDefinition>,
    /// Definition of the item currently occupying the target slot.
    pub target_item: Option<&'a ItemDefinition>,
}

/// Classifies a request into exactly one resolution.
pub fn resolve(player: &PlayerState, input: &ResolveInput<'_>, rule: RequirementRule) -> Resolution {
    let TransferRequest { source, target } = input.request;

    for slot in [source, target] {
        if let SlotId::Inventory(index) = slot
            && index as usize >= EngineConfig::INVENTORY_CAPACITY
        {
            return Resolution::Unresolved(UnresolvedReason::UnknownSlot(slot.to_string()));
        }
    }

    let Some(item) = input.source_item else {
        return Resolution::Unresolved(UnresolvedReason::EmptySource);
    };

    let resolution = match_rule(player, input, item, rule);
    trace!(%source, %target, ?resolution, "resolved transfer");
    resolution
}

fn match_rule(
    player: &PlayerState,
    input: &ResolveInput<'_>,
    item: &ItemDefinition,
    rule: RequirementRule,
) -> Resolution {
    use ContainerKind::{Sell, Stash, Store};

    let TransferRequest { source, target } = input.request;

    match (source, source.kind(), target, target.kind()) {
        // 1
        (SlotId::Store(offer), _, SlotId::Inventory(to), _) => purchase(player, offer, item, to),
        // 2
        (_, Store, _, kind) if kind != Store && kind != Sell => {
            Resolution::Reject(RejectReason::MustGoToInventory)
        }
        // 3
        (_, _, _, Store) => Resolution::NoOp(NoOpReason::DropOnStore),
        // 4
        (_, Store, _, Sell) => Resolution::NoOp(NoOpReason::StoreToSell),
        // 6, then 5
        (SlotId::Inventory(from), _, _, Sell) => Resolution::Apply(Action::Sell {
            from,
            price: item.sell_value,
        }),
        (_, _, _, Sell) => Resolution::Reject(RejectReason::MustUnequipFirst),
        // 8, then 7
        (SlotId::Inventory(from), _, _, Stash) => Resolution::Apply(Action::Deposit {
            from,
            to: player.stash.len() as u16,
        }),
        (_, _, _, Stash) => Resolution::Reject(RejectReason::MustUnequipFirst),
        // 10, then 9
        (SlotId::Stash(from), _, SlotId::Inventory(to), _) => withdraw(player, from, to),
        (_, Stash, _, _) => Resolution::Reject(RejectReason::MustGoToInventoryFirst),
        // 11
        (_, _, SlotId::Equipment(slot), _) if !source.is_any_equipment_slot() => {
            equip(player, input, item, slot, rule)
        }
        // 12
        (_, _, SlotId::Equipment(slot), _) if source.is_weapon_slot() && slot.is_weapon() => {
            equip(player, input, item, slot, rule)
        }
        // 13
        (SlotId::Equipment(slot), _, SlotId::Trash, _) => {
            Resolution::Apply(Action::DiscardEquipped { slot })
        }
        // 14
        (SlotId::Inventory(from), _, SlotId::Trash, _) => {
            Resolution::Apply(Action::DiscardInventory { from })
        }
        // 15
        (SlotId::Equipment(slot), _, _, kind) if kind != ContainerKind::Equipment => {
            unequip(player, input, slot, rule)
        }
        // 16
        (SlotId::Inventory(from), _, SlotId::Inventory(to), _) => {
            Resolution::Apply(Action::Sort { from, to })
        }
        // 17
        _ => Resolution::Unresolved(UnresolvedReason::NoMatchingRule),
    }
}

fn purchase(player: &PlayerState, offer: u16, item: &ItemDefinition, to: u8) -> Resolution {
    let price = item.buy_value;
    if player.gold < price {
        return Resolution::Reject(RejectReason::InsufficientGold {
            required: price,
            available: player.gold,
        });
    }

    match player.inventory.free_slot_preferring(to as usize) {
        Some(to) => Resolution::Apply(Action::Purchase {
            offer,
            item: item.handle,
            to: to as u8,
            price,
        }),
        None => Resolution::Reject(RejectReason::InventoryFull),
    }
}

fn withdraw(player: &PlayerState, from: u16, to: u8) -> Resolution {
    match player.inventory.free_slot_preferring(to as usize) {
        Some(to) => Resolution::Apply(Action::Withdraw {
            from,
            to: to as u8,
        }),
        None => Resolution::Reject(RejectReason::InventoryFull),
    }
}

/// Checks that `item` may occupy `slot`: requirements first, then family.
fn fits(
    player: &PlayerState,
    item: &ItemDefinition,
    slot: EquipSlot,
    rule: RequirementRule,
) -> Result<(), RejectReason> {
    if !can_equip(player, item, rule) {
        return Err(RejectReason::RequirementsNotMet);
    }

    match slot.family() {
        SlotFamily::Weapon(_) if item.is_weapon() => Ok(()),
        SlotFamily::Weapon(_) => Err(RejectReason::NotAWeapon),
        SlotFamily::Armor(armor) => match item.armor_type() {
            Some(kind) if armor.accepts(kind) => Ok(()),
            _ => Err(RejectReason::ArmorTypeMismatch),
        },
    }
}

fn equip(
    player: &PlayerState,
    input: &ResolveInput<'_>,
    item: &ItemDefinition,
    slot: EquipSlot,
    rule: RequirementRule,
) -> Resolution {
    if let Err(reason) = fits(player, item, slot, rule) {
        return Resolution::Reject(reason);
    }

    let source = input.request.source;
    if let (Some(from), Some(to)) = (source.equip_slot().and_then(EquipSlot::weapon), slot.weapon())
    {
        return Resolution::Apply(Action::WeaponSwap { from, to });
    }

    let SlotId::Inventory(from) = source else {
        return Resolution::Unresolved(UnresolvedReason::NoMatchingRule);
    };

    if input.target_item.is_some() {
        Resolution::Apply(Action::EquipSwap { from, slot })
    } else {
        Resolution::Apply(Action::EquipFromInventory { from, slot })
    }
}

fn unequip(
    player: &PlayerState,
    input: &ResolveInput<'_>,
    slot: EquipSlot,
    rule: RequirementRule,
) -> Resolution {
    let SlotId::Inventory(to) = input.request.target else {
        return Resolution::Unresolved(UnresolvedReason::NoMatchingRule);
    };

    match input.target_item {
        // The inventory occupant moves into the equipment slot, so it must fit.
        Some(occupant) => match fits(player, occupant, slot, rule) {
            Ok(()) => Resolution::Apply(Action::UnequipSwap { slot, with: to }),
            Err(reason) => Resolution::Reject(reason),
        },
        None => Resolution::Apply(Action::Unequip { slot, to }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ArmorType, ItemClass, Requirements};
    use crate::slot::WeaponSlot;
    use crate::state::{Attributes, ItemHandle};

    fn sword() -> ItemDefinition {
        ItemDefinition::new(ItemHandle(1), "Sword", ItemClass::Weapon).with_values(100, 40)
    }

    fn helm() -> ItemDefinition {
        ItemDefinition::new(ItemHandle(2), "Helm", ItemClass::Armor(ArmorType::Head))
            .with_values(60, 20)
    }

    fn player() -> PlayerState {
        PlayerState::new(500, 5, Attributes::new(10, 10, 10))
    }

    fn run(
        player: &PlayerState,
        source: SlotId,
        target: SlotId,
        source_item: Option<&ItemDefinition>,
        target_item: Option<&ItemDefinition>,
    ) -> Resolution {
        let input = ResolveInput {
            request: TransferRequest::new(source, target),
            source_item,
            target_item,
        };
        resolve(player, &input, RequirementRule::default())
    }

    #[test]
    fn empty_source_is_unresolved_before_rules() {
        let resolution = run(&player(), SlotId::Inventory(0), SlotId::Store(0), None, None);
        assert_eq!(resolution, Resolution::Unresolved(UnresolvedReason::EmptySource));
    }

    #[test]
    fn out_of_range_inventory_index_is_unknown() {
        let resolution = run(&player(), SlotId::Inventory(0), SlotId::Inventory(15), Some(&sword()), None);
        assert_eq!(
            resolution,
            Resolution::Unresolved(UnresolvedReason::UnknownSlot("inventory:15".into()))
        );
    }

    #[test]
    fn purchase_prefers_target_then_first_free() {
        let mut player = player();
        let held = player.allocate_instance(ItemHandle(2));
        player.inventory.put(3, held).unwrap();

        let item = sword();
        assert_eq!(
            run(&player, SlotId::Store(1), SlotId::Inventory(4), Some(&item), None),
            Resolution::Apply(Action::Purchase { offer: 1, item: ItemHandle(1), to: 4, price: 100 })
        );
        assert_eq!(
            run(&player, SlotId::Store(1), SlotId::Inventory(3), Some(&item), None),
            Resolution::Apply(Action::Purchase { offer: 1, item: ItemHandle(1), to: 0, price: 100 })
        );
    }

    #[test]
    fn purchase_checks_gold_before_capacity() {
        let mut player = player();
        player.gold = 10;
        for index in 0..EngineConfig::INVENTORY_CAPACITY {
            let item = player.allocate_instance(ItemHandle(2));
            player.inventory.put(index, item).unwrap();
        }

        assert_eq!(
            run(&player, SlotId::Store(0), SlotId::Inventory(0), Some(&sword()), None),
            Resolution::Reject(RejectReason::InsufficientGold { required: 100, available: 10 })
        );

        player.gold = 1_000;
        assert_eq!(
            run(&player, SlotId::Store(0), SlotId::Inventory(0), Some(&sword()), None),
            Resolution::Reject(RejectReason::InventoryFull)
        );
    }

    #[test]
    fn store_drops_anywhere_but_inventory_are_rejected_or_ignored() {
        let player = player();
        let item = sword();
        let store = SlotId::Store(0);

        assert_eq!(
            run(&player, store, SlotId::Stash(0), Some(&item), None),
            Resolution::Reject(RejectReason::MustGoToInventory)
        );
        assert_eq!(
            run(&player, store, SlotId::Equipment(EquipSlot::Weapon1), Some(&item), None),
            Resolution::Reject(RejectReason::MustGoToInventory)
        );
        assert_eq!(
            run(&player, store, SlotId::Store(2), Some(&item), None),
            Resolution::NoOp(NoOpReason::DropOnStore)
        );
        assert_eq!(
            run(&player, store, SlotId::Sell, Some(&item), None),
            Resolution::NoOp(NoOpReason::StoreToSell)
        );
    }

    #[test]
    fn equipped_items_cannot_skip_the_inventory() {
        let player = player();
        let item = sword();
        let weapon = SlotId::Equipment(EquipSlot::Weapon2);

        assert_eq!(
            run(&player, weapon, SlotId::Sell, Some(&item), None),
            Resolution::Reject(RejectReason::MustUnequipFirst)
        );
        assert_eq!(
            run(&player, weapon, SlotId::Stash(0), Some(&item), None),
            Resolution::Reject(RejectReason::MustUnequipFirst)
        );
        assert_eq!(
            run(&player, weapon, SlotId::Store(0), Some(&item), None),
            Resolution::NoOp(NoOpReason::DropOnStore)
        );
    }

    #[test]
    fn stash_entries_return_through_the_inventory() {
        let player = player();
        let item = helm();

        assert_eq!(
            run(&player, SlotId::Stash(2), SlotId::Equipment(EquipSlot::Head), Some(&item), None),
            Resolution::Reject(RejectReason::MustGoToInventoryFirst)
        );
        assert_eq!(
            run(&player, SlotId::Stash(2), SlotId::Trash, Some(&item), None),
            Resolution::Reject(RejectReason::MustGoToInventoryFirst)
        );
        assert_eq!(
            run(&player, SlotId::Stash(2), SlotId::Inventory(7), Some(&item), None),
            Resolution::Apply(Action::Withdraw { from: 2, to: 7 })
        );
    }

    #[test]
    fn equip_checks_requirements_before_slot_type() {
        let player = player();
        let heavy = helm().with_requirements(Requirements::new(50, 0, 0, 0));

        assert_eq!(
            run(&player, SlotId::Inventory(0), SlotId::Equipment(EquipSlot::Chest), Some(&heavy), None),
            Resolution::Reject(RejectReason::RequirementsNotMet)
        );
        assert_eq!(
            run(&player, SlotId::Inventory(0), SlotId::Equipment(EquipSlot::Chest), Some(&helm()), None),
            Resolution::Reject(RejectReason::ArmorTypeMismatch)
        );
        assert_eq!(
            run(&player, SlotId::Inventory(0), SlotId::Equipment(EquipSlot::Weapon1), Some(&helm()), None),
            Resolution::Reject(RejectReason::NotAWeapon)
        );
    }

    #[test]
    fn equip_swaps_when_slot_is_occupied() {
        let player = player();
        let item = helm();
        let head = SlotId::Equipment(EquipSlot::Head);

        assert_eq!(
            run(&player, SlotId::Inventory(5), head, Some(&item), None),
            Resolution::Apply(Action::EquipFromInventory { from: 5, slot: EquipSlot::Head })
        );
        assert_eq!(
            run(&player, SlotId::Inventory(5), head, Some(&item), Some(&helm())),
            Resolution::Apply(Action::EquipSwap { from: 5, slot: EquipSlot::Head })
        );
    }

    #[test]
    fn weapon_to_weapon_is_a_swap() {
        let resolution = run(
            &player(),
            SlotId::Equipment(EquipSlot::Weapon1),
            SlotId::Equipment(EquipSlot::Weapon3),
            Some(&sword()),
            None,
        );
        assert_eq!(
            resolution,
            Resolution::Apply(Action::WeaponSwap { from: WeaponSlot::Weapon1, to: WeaponSlot::Weapon3 })
        );
    }

    #[test]
    fn armor_to_armor_is_unresolved() {
        let resolution = run(
            &player(),
            SlotId::Equipment(EquipSlot::Head),
            SlotId::Equipment(EquipSlot::Chest),
            Some(&helm()),
            None,
        );
        assert_eq!(resolution, Resolution::Unresolved(UnresolvedReason::NoMatchingRule));
    }

    #[test]
    fn trash_destroys_from_equipment_or_inventory() {
        let player = player();
        assert_eq!(
            run(&player, SlotId::Equipment(EquipSlot::Head), SlotId::Trash, Some(&helm()), None),
            Resolution::Apply(Action::DiscardEquipped { slot: EquipSlot::Head })
        );
        assert_eq!(
            run(&player, SlotId::Inventory(9), SlotId::Trash, Some(&helm()), None),
            Resolution::Apply(Action::DiscardInventory { from: 9 })
        );
    }

    #[test]
    fn unequip_swap_requires_the_occupant_to_fit() {
        let player = player();
        let head = SlotId::Equipment(EquipSlot::Head);

        assert_eq!(
            run(&player, head, SlotId::Inventory(1), Some(&helm()), None),
            Resolution::Apply(Action::Unequip { slot: EquipSlot::Head, to: 1 })
        );
        assert_eq!(
            run(&player, head, SlotId::Inventory(1), Some(&helm()), Some(&helm())),
            Resolution::Apply(Action::UnequipSwap { slot: EquipSlot::Head, with: 1 })
        );
        assert_eq!(
            run(&player, head, SlotId::Inventory(1), Some(&helm()), Some(&sword())),
            Resolution::Reject(RejectReason::ArmorTypeMismatch)
        );
    }

    #[test]
    fn inventory_to_inventory_sorts() {
        let resolution = run(&player(), SlotId::Inventory(2), SlotId::Inventory(8), Some(&sword()), None);
        assert_eq!(resolution, Resolution::Apply(Action::Sort { from: 2, to: 8 }));
    }

    #[test]
    fn sell_uses_sell_value() {
        let resolution = run(&player(), SlotId::Inventory(0), SlotId::Sell, Some(&sword()), None);
        assert_eq!(resolution, Resolution::Apply(Action::Sell { from: 0, price: 40 }));
    }
}
