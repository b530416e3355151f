//! Environments and cells.
//!
//! An [`Environment`] is an ordered list of bindings from names to
//! [`Cell`]s. Environments are persistent: [`Environment::extend`] returns a
//! new environment and leaves its input untouched, sharing every cell by
//! reference. A cell is the only thing that is ever mutated, and only to
//! backpatch a `let rec` placeholder.
//!
//! Each name has at most one binding. Extending with a name that is already
//! bound re-points that entry, in place in the new list, at the new cell;
//! extending with a fresh name appends.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use lamb_ir::Name;

use crate::Value;

/// Shared, interior-mutable storage for one value.
///
/// Cloning a `Cell` clones the handle, not the value: every clone observes
/// writes made through any other.
#[derive(Clone)]
#[repr(transparent)]
pub struct Cell(Rc<RefCell<Value>>);

impl Cell {
    pub fn new(value: Value) -> Self {
        Cell(Rc::new(RefCell::new(value)))
    }

    /// A cell holding the `let rec` placeholder.
    pub fn unassigned() -> Self {
        Cell::new(Value::unassigned())
    }

    /// Current contents.
    pub fn get(&self) -> Value {
        self.0.borrow().clone()
    }

    /// Overwrite the contents (letrec backpatch).
    pub fn set(&self, value: Value) {
        *self.0.borrow_mut() = value;
    }

    pub fn is_unassigned(&self) -> bool {
        self.0.borrow().is_unassigned()
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cell").field(&*self.0.borrow()).finish()
    }
}

/// One name-to-cell association.
#[derive(Clone, Debug)]
struct Binding {
    name: Name,
    cell: Cell,
}

/// Ordered, persistent list of bindings.
///
/// Cloning an environment is cheap and shares the binding list, which is how
/// closures hold on to the environment they were created in.
#[derive(Clone)]
pub struct Environment {
    bindings: Rc<[Binding]>,
}

impl Environment {
    /// The environment with no bindings.
    pub fn empty() -> Self {
        Environment {
            bindings: Rc::from(Vec::new()),
        }
    }

    /// Build an environment from `(name, value)` pairs, each in a new cell.
    ///
    /// Later pairs win over earlier pairs with the same name.
    pub fn from_bindings(bindings: impl IntoIterator<Item = (Name, Value)>) -> Self {
        bindings
            .into_iter()
            .fold(Environment::empty(), |env, (name, value)| {
                env.extend(name, Cell::new(value))
            })
    }

    /// Return a new environment with `name` bound to `cell`.
    ///
    /// If `name` is already bound its entry keeps its position and points at
    /// `cell`; otherwise a new entry is appended. `self` is unchanged.
    #[must_use]
    pub fn extend(&self, name: Name, cell: Cell) -> Self {
        let mut bindings = self.bindings.to_vec();
        match bindings.iter_mut().find(|binding| binding.name == name) {
            Some(existing) => existing.cell = cell,
            None => bindings.push(Binding { name, cell }),
        }
        tracing::trace!(?name, len = bindings.len(), "extend environment");
        Environment {
            bindings: Rc::from(bindings),
        }
    }

    /// The cell bound to `name`, if any.
    pub fn cell(&self, name: Name) -> Option<&Cell> {
        self.bindings
            .iter()
            .find(|binding| binding.name == name)
            .map(|binding| &binding.cell)
    }

    /// Current contents of the cell bound to `name`.
    ///
    /// Reads the cell at call time, so a backpatch made before the call is
    /// visible.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.cell(name).map(Cell::get)
    }

    /// Bound names, in binding order.
    pub fn names(&self) -> impl Iterator<Item = Name> + '_ {
        self.bindings.iter().map(|binding| binding.name)
    }

    /// Bindings in order, as `(name, cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Name, &Cell)> + '_ {
        self.bindings
            .iter()
            .map(|binding| (binding.name, &binding.cell))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Whether both environments share the same binding list.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.bindings, &other.bindings)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Environment {
    // Names only: a recursive closure's environment contains the closure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
