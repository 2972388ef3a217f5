//! Property system.
//!
//! [`Property<T>`] wraps a value and reports whether a write actually changed
//! it, so the owner can emit its change signal only on real changes.
//!
//! # Example
//!
//! ```
//! use menu_button_core::Property;
//!
//! let prop = Property::new(String::new());
//! assert!(prop.set("Action 1".to_string()));
//! assert!(!prop.set("Action 1".to_string()));
//! assert_eq!(prop.get(), "Action 1");
//! ```

use std::fmt;

use parking_lot::RwLock;

use crate::logging::targets;

/// A reactive property that tracks changes.
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// when `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value (cloned).
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            tracing::trace!(target: targets::PROPERTY, "property changed");
            true
        } else {
            false
        }
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.value.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_set_reports_change() {
        let prop = Property::new(1);
        assert!(!prop.set(1));
        assert!(prop.set(2));
        assert_eq!(prop.get(), 2);
    }

    #[test]
    fn test_property_default() {
        let prop: Property<String> = Property::default();
        assert!(prop.get().is_empty());
    }
}
