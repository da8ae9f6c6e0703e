use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A reference-counted, interior-mutable handle to state that several owners
/// (a document and its nodes, or a page and the callbacks it queues) read and update.
pub struct Shared<T: ?Sized> {
    rc: Rc<RefCell<T>>,
}

impl<T> Shared<T> {
    pub fn new(val: T) -> Self {
        Shared {
            rc: Rc::new(RefCell::new(val)),
        }
    }
}

impl<T: ?Sized> Shared<T> {
    /// Runs `f` with an immutable reference to the wrapped value.
    ///
    /// # Panics
    ///
    /// Panics if `f` or a caller further up the stack is inside `exec_mut` on the same value,
    /// e.g. an event handler reading a node while the node's listener list is being edited.
    ///
    /// # Example
    ///
    /// ```
    /// # use kinetic::shared::Shared;
    /// let count = Shared::new(10i64);
    /// let doubled = count.exec(|&n| n * 2);
    /// assert_eq!(doubled, 20);
    /// ```
    pub fn exec<Ret, F: FnOnce(&T) -> Ret>(&self, f: F) -> Ret {
        f(&self.rc.borrow())
    }

    /// Runs `f` with a mutable reference to the wrapped value.
    ///
    /// # Panics
    ///
    /// Panics if the value is already borrowed through `exec` or `exec_mut`.
    ///
    /// # Example
    ///
    /// ```
    /// # use kinetic::shared::Shared;
    /// let classes = Shared::new(vec!["card"]);
    /// classes.exec_mut(|classes| classes.push("flipped"));
    /// classes.exec(|classes| assert_eq!(classes, &["card", "flipped"]));
    /// ```
    pub fn exec_mut<Ret, F: FnOnce(&mut T) -> Ret>(&self, f: F) -> Ret {
        f(&mut self.rc.borrow_mut())
    }

    /// Returns `true` if both handles point at the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.rc, &other.rc)
    }

    /// Creates a handle that does not keep the value alive.
    pub fn downgrade(&self) -> WeakShared<T> {
        WeakShared {
            weak: Rc::downgrade(&self.rc),
        }
    }
}

impl<T: ?Sized> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared {
            rc: self.rc.clone(),
        }
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl<T> From<T> for Shared<T> {
    fn from(val: T) -> Self {
        Self::new(val)
    }
}

/// A non-owning counterpart of [`Shared`], used for back references such as a
/// node's link to its parent.
pub struct WeakShared<T: ?Sized> {
    weak: Weak<RefCell<T>>,
}

impl<T: ?Sized> WeakShared<T> {
    /// Returns a [`Shared`] handle if the value is still alive.
    ///
    /// ```
    /// # use kinetic::shared::Shared;
    /// let value = Shared::new(1u8);
    /// let weak = value.downgrade();
    /// assert!(weak.upgrade().is_some());
    /// drop(value);
    /// assert!(weak.upgrade().is_none());
    /// ```
    pub fn upgrade(&self) -> Option<Shared<T>> {
        self.weak.upgrade().map(|rc| Shared { rc })
    }
}

impl<T: ?Sized> Clone for WeakShared<T> {
    fn clone(&self) -> Self {
        WeakShared {
            weak: self.weak.clone(),
        }
    }
}
