//! Sibling ordering
//!
//! Positions are plain integers, unique per sibling set. New entities append
//! at `max + 1`; a move swaps exactly two position values inside one
//! transaction and touches nothing else, so the operation is its own inverse
//! while the pair stays adjacent.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Category, Group, Item};
use crate::error::DomainError;
use crate::store::HierarchyStore;

pub struct SiblingOrder<S> {
    store: Arc<S>,
}

impl<S> Clone for SiblingOrder<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

trait Sibling {
    fn id(&self) -> Uuid;
    fn position(&self) -> i32;
}

impl Sibling for Category {
    fn id(&self) -> Uuid {
        self.id
    }
    fn position(&self) -> i32 {
        self.position
    }
}

impl Sibling for Group {
    fn id(&self) -> Uuid {
        self.id
    }
    fn position(&self) -> i32 {
        self.position
    }
}

impl Sibling for Item {
    fn id(&self) -> Uuid {
        self.id
    }
    fn position(&self) -> i32 {
        self.position
    }
}

/// `max(position) + 1`, or 0 for an empty sibling set. Input is sorted by
/// `(position, id)`, so the maximum is the last element. Saturates instead of
/// overflowing; entity validation caps positions well below the saturation
/// point, so a saturated value fails the create rather than wrapping.
fn append_position<T: Sibling>(siblings: &[T]) -> i32 {
    siblings
        .last()
        .map(|s| s.position().saturating_add(1))
        .unwrap_or(0)
}

/// Sibling with the smallest position strictly greater than `of`'s own.
/// Ties resolve to the smallest id because the input is `(position, id)`
/// sorted and `find` takes the first match.
fn next_of<'a, T: Sibling>(siblings: &'a [T], of: &T) -> Option<&'a T> {
    siblings.iter().find(|s| s.position() > of.position())
}

/// Sibling with the largest position strictly less than `of`'s own, smallest
/// id on a tie.
fn previous_of<'a, T: Sibling>(siblings: &'a [T], of: &T) -> Option<&'a T> {
    let below: Vec<&T> = siblings
        .iter()
        .take_while(|s| s.position() < of.position())
        .collect();
    let target = below.last()?.position();
    below.iter().find(|s| s.position() == target).copied()
}

impl<S: HierarchyStore> SiblingOrder<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    // -- insertion positions ------------------------------------------------

    pub async fn next_category_position(&self, menu_id: Uuid) -> Result<i32, DomainError> {
        Ok(append_position(
            &self.store.categories_by_menu(menu_id).await?,
        ))
    }

    pub async fn next_group_position(&self, category_id: Uuid) -> Result<i32, DomainError> {
        Ok(append_position(
            &self.store.groups_by_category(category_id).await?,
        ))
    }

    pub async fn next_item_position(&self, group_id: Uuid) -> Result<i32, DomainError> {
        Ok(append_position(&self.store.items_by_group(group_id).await?))
    }

    // -- neighbors ----------------------------------------------------------

    pub async fn next_category(&self, of: &Category) -> Result<Option<Category>, DomainError> {
        let siblings = self.store.categories_by_menu(of.menu_id).await?;
        Ok(next_of(&siblings, of).cloned())
    }

    pub async fn previous_category(&self, of: &Category) -> Result<Option<Category>, DomainError> {
        let siblings = self.store.categories_by_menu(of.menu_id).await?;
        Ok(previous_of(&siblings, of).cloned())
    }

    pub async fn next_group(&self, of: &Group) -> Result<Option<Group>, DomainError> {
        let siblings = self.store.groups_by_category(of.category_id).await?;
        Ok(next_of(&siblings, of).cloned())
    }

    pub async fn previous_group(&self, of: &Group) -> Result<Option<Group>, DomainError> {
        let siblings = self.store.groups_by_category(of.category_id).await?;
        Ok(previous_of(&siblings, of).cloned())
    }

    pub async fn next_item(&self, of: &Item) -> Result<Option<Item>, DomainError> {
        let siblings = self.store.items_by_group(of.group_id).await?;
        Ok(next_of(&siblings, of).cloned())
    }

    pub async fn previous_item(&self, of: &Item) -> Result<Option<Item>, DomainError> {
        let siblings = self.store.items_by_group(of.group_id).await?;
        Ok(previous_of(&siblings, of).cloned())
    }

    pub async fn is_first_category(&self, of: &Category) -> Result<bool, DomainError> {
        Ok(self.previous_category(of).await?.is_none())
    }

    pub async fn is_last_category(&self, of: &Category) -> Result<bool, DomainError> {
        Ok(self.next_category(of).await?.is_none())
    }

    pub async fn is_first_group(&self, of: &Group) -> Result<bool, DomainError> {
        Ok(self.previous_group(of).await?.is_none())
    }

    pub async fn is_last_group(&self, of: &Group) -> Result<bool, DomainError> {
        Ok(self.next_group(of).await?.is_none())
    }

    pub async fn is_first_item(&self, of: &Item) -> Result<bool, DomainError> {
        Ok(self.previous_item(of).await?.is_none())
    }

    pub async fn is_last_item(&self, of: &Item) -> Result<bool, DomainError> {
        Ok(self.next_item(of).await?.is_none())
    }

    // -- swaps --------------------------------------------------------------

    /// Exchange the two position values and persist both rows atomically.
    pub async fn swap_categories(
        &self,
        mut a: Category,
        mut b: Category,
    ) -> Result<(), DomainError> {
        std::mem::swap(&mut a.position, &mut b.position);
        let mut tx = self.store.begin().await?;
        let result = async {
            self.store.update_category(&mut tx, &a).await?;
            self.store.update_category(&mut tx, &b).await
        }
        .await;
        match result {
            Ok(()) => self.store.commit(tx).await,
            Err(e) => {
                let _ = self.store.rollback(tx).await;
                Err(e)
            }
        }
    }

    pub async fn swap_groups(&self, mut a: Group, mut b: Group) -> Result<(), DomainError> {
        std::mem::swap(&mut a.position, &mut b.position);
        let mut tx = self.store.begin().await?;
        let result = async {
            self.store.update_group(&mut tx, &a).await?;
            self.store.update_group(&mut tx, &b).await
        }
        .await;
        match result {
            Ok(()) => self.store.commit(tx).await,
            Err(e) => {
                let _ = self.store.rollback(tx).await;
                Err(e)
            }
        }
    }

    pub async fn swap_items(&self, mut a: Item, mut b: Item) -> Result<(), DomainError> {
        std::mem::swap(&mut a.position, &mut b.position);
        let mut tx = self.store.begin().await?;
        let result = async {
            self.store.update_item(&mut tx, &a).await?;
            self.store.update_item(&mut tx, &b).await
        }
        .await;
        match result {
            Ok(()) => self.store.commit(tx).await,
            Err(e) => {
                let _ = self.store.rollback(tx).await;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(position: i32, id: Uuid) -> Category {
        Category {
            id,
            place_id: Uuid::new_v4(),
            menu_id: Uuid::new_v4(),
            name: "c".to_string(),
            position,
        }
    }

    fn sorted(mut siblings: Vec<Category>) -> Vec<Category> {
        siblings.sort_by_key(|c| (c.position, c.id));
        siblings
    }

    #[test]
    fn test_append_position_empty() {
        let siblings: Vec<Category> = vec![];
        assert_eq!(append_position(&siblings), 0);
    }

    #[test]
    fn test_append_position_skips_gaps() {
        let siblings = sorted(vec![
            category(0, Uuid::new_v4()),
            category(5, Uuid::new_v4()),
        ]);
        assert_eq!(append_position(&siblings), 6);
    }

    #[test]
    fn test_append_position_saturates_instead_of_wrapping() {
        let siblings = sorted(vec![category(i32::MAX, Uuid::new_v4())]);
        assert_eq!(append_position(&siblings), i32::MAX);
    }

    #[test]
    fn test_neighbors_at_ends() {
        let siblings = sorted(vec![
            category(0, Uuid::new_v4()),
            category(1, Uuid::new_v4()),
        ]);
        assert!(previous_of(&siblings, &siblings[0]).is_none());
        assert!(next_of(&siblings, &siblings[1]).is_none());
        assert_eq!(next_of(&siblings, &siblings[0]).unwrap().id, siblings[1].id);
        assert_eq!(
            previous_of(&siblings, &siblings[1]).unwrap().id,
            siblings[0].id
        );
    }

    #[test]
    fn test_tie_resolves_to_smallest_id() {
        let low = Uuid::from_u128(1);
        let high = Uuid::from_u128(2);
        let me = category(3, Uuid::from_u128(9));
        let siblings = sorted(vec![category(1, high), category(1, low), me.clone()]);
        let previous = previous_of(&siblings, &me).unwrap();
        assert_eq!(previous.id, low);
    }
}
