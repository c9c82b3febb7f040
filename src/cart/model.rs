use serde::Serialize;
use uuid::Uuid;

/// Result of adding an identifier to a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    Added,
    AlreadyInCart,
}

/// Ordered set of product identifiers pending purchase.
///
/// Identifiers are opaque here: nothing is checked against the catalog until
/// the cart is priced at checkout. Each product appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<Uuid>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product_id: Uuid) -> AddOutcome {
        if self.contains(product_id) {
            return AddOutcome::AlreadyInCart;
        }
        self.items.push(product_id);
        AddOutcome::Added
    }

    /// Returns whether the identifier was present. Absent ids are a silent no-op.
    pub fn remove(&mut self, product_id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|id| *id != product_id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Identifiers in insertion order.
    pub fn list(&self) -> &[Uuid] {
        &self.items
    }

    pub fn contains(&self, product_id: Uuid) -> bool {
        self.items.contains(&product_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_add_keeps_one_occurrence() {
        let mut cart = Cart::new();
        let id = Uuid::new_v4();
        assert_eq!(cart.add(id), AddOutcome::Added);
        assert_eq!(cart.add(id), AddOutcome::AlreadyInCart);
        assert_eq!(cart.list(), &[id]);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut cart = Cart::new();
        let ids: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        for id in &ids {
            cart.add(*id);
        }
        cart.add(ids[1]);
        assert_eq!(cart.list(), ids.as_slice());
    }

    #[test]
    fn removing_absent_id_is_a_noop() {
        let mut cart = Cart::new();
        let kept = Uuid::new_v4();
        cart.add(kept);
        assert!(!cart.remove(Uuid::new_v4()));
        assert_eq!(cart.list(), &[kept]);
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut cart = Cart::new();
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        cart.add(a);
        cart.add(b);
        cart.add(c);
        assert!(cart.remove(b));
        assert_eq!(cart.list(), &[a, c]);
        // removed ids can be added back
        assert_eq!(cart.add(b), AddOutcome::Added);
        assert_eq!(cart.list(), &[a, c, b]);
    }

    #[test]
    fn clear_then_list_is_empty() {
        let mut cart = Cart::new();
        cart.add(Uuid::new_v4());
        cart.add(Uuid::new_v4());
        cart.clear();
        assert!(cart.list().is_empty());
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);

        // clearing an empty cart is fine too
        cart.clear();
        assert!(cart.is_empty());
    }
}
