//! Inventory statistics derived from the loaded item list

use serde::{Deserialize, Serialize};

use crate::{InventoryItem, ItemType};

/// Item counts shown on the stats panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total: usize,
    pub weapons: usize,
    pub armor: usize,
    pub consumables: usize,
}

impl InventoryStats {
    /// Count entries per type. Quantities are not summed: five potions in one
    /// stack count as one consumable entry.
    pub fn from_items(items: &[InventoryItem]) -> Self {
        let count = |wanted: &ItemType| items.iter().filter(|i| &i.item_type == wanted).count();

        Self {
            total: items.len(),
            weapons: count(&ItemType::Weapon),
            armor: count(&ItemType::Armor),
            consumables: count(&ItemType::Consumable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_for_single_sword() {
        let items = vec![InventoryItem::new("Sword", ItemType::Weapon, 1).with_property("damage", "10")];

        assert_eq!(
            InventoryStats::from_items(&items),
            InventoryStats {
                total: 1,
                weapons: 1,
                armor: 0,
                consumables: 0,
            }
        );
    }

    #[test]
    fn test_stats_ignore_quantity_and_other_types() {
        let items = vec![
            InventoryItem::new("Health Potion", ItemType::Consumable, 5),
            InventoryItem::new("Mana Potion", ItemType::Consumable, 3),
            InventoryItem::new("Leather Armor", ItemType::Armor, 1),
            InventoryItem::new("Dragon Scale", ItemType::Special, 1),
            InventoryItem::new("Old Key", ItemType::from("quest"), 1),
        ];

        let stats = InventoryStats::from_items(&items);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.weapons, 0);
        assert_eq!(stats.armor, 1);
        assert_eq!(stats.consumables, 2);
    }

    #[test]
    fn test_stats_for_empty_inventory() {
        assert_eq!(InventoryStats::from_items(&[]), InventoryStats::default());
    }
}
