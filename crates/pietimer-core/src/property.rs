//! Values that report whether a write changed them.
//!
//! A [`Property`] does not notify anyone by itself. Its owner checks the
//! result of [`Property::set`] and emits its own signal.
//!
//! ```
//! use pietimer_core::{Property, Signal};
//!
//! let angle = Property::new(0);
//! let angle_changed = Signal::<i32>::new();
//!
//! if angle.set(90) {
//!     angle_changed.emit(90);
//! }
//! assert!(!angle.set(90));
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A shared value with change detection.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone + PartialEq> Property<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Store `value`. Returns `true` only if it differs from the old value.
    pub fn set(&self, value: T) -> bool {
        let mut slot = self.value.write();
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Property").field(&*self.value.read()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_reports_change() {
        let prop = Property::new(42);
        assert!(!prop.set(42));
        assert!(prop.set(100));
        assert_eq!(prop.get(), 100);
        assert_eq!(format!("{prop:?}"), "Property(100)");
    }
}
