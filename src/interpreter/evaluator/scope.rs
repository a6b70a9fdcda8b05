use std::collections::HashMap;

use crate::{ast::FunctionDecl, interpreter::value::core::Value};

/// A variable and function environment.
///
/// A scope may reference an enclosing scope; lookups walk that chain, but
/// assignments only ever touch the scope they are made in. Function calls do
/// not chain at all: they run in a snapshot of the caller's bindings, so
/// nothing a function does to its variables leaks back out.
///
/// # Example
/// ```
/// use fracta::interpreter::{evaluator::scope::Scope, value::core::Value};
///
/// let mut outer = Scope::root();
/// outer.assign("x", Value::Integer(1));
///
/// let inner = Scope::with_parent(&outer);
/// assert_eq!(inner.lookup("x"), Some(Value::Integer(1)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scope<'p> {
    variables: HashMap<String, Value>,
    functions: HashMap<String, FunctionDecl>,
    parent:    Option<&'p Scope<'p>>,
}

impl<'p> Scope<'p> {
    /// Creates an empty scope with no parent.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates an empty scope that resolves missing names through `parent`.
    #[must_use]
    pub fn with_parent(parent: &'p Scope<'p>) -> Self {
        Self { variables: HashMap::new(),
               functions: HashMap::new(),
               parent:    Some(parent), }
    }

    /// Builds the scope a function body runs in: a parentless copy of this
    /// scope's variable and function bindings.
    ///
    /// # Example
    /// ```
    /// use fracta::interpreter::{evaluator::scope::Scope, value::core::Value};
    ///
    /// let mut caller = Scope::root();
    /// caller.assign("x", Value::Integer(1));
    ///
    /// let mut callee = caller.call_scope();
    /// callee.assign("x", Value::Integer(99));
    ///
    /// // The caller never sees the callee's writes.
    /// assert_eq!(caller.lookup("x"), Some(Value::Integer(1)));
    /// ```
    #[must_use]
    pub fn call_scope(&self) -> Scope<'static> {
        Scope { variables: self.variables.clone(),
                functions: self.functions.clone(),
                parent:    None, }
    }

    /// Looks a variable up, walking the parent chain, and returns a copy of
    /// its value.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.variables.get(name) {
            return Some(value.clone());
        }
        self.parent.and_then(|parent| parent.lookup(name))
    }

    /// Looks a variable up in this scope only and returns a mutable handle
    /// into the binding itself.
    ///
    /// This is the in-place counterpart to [`Scope::lookup`]. Parent
    /// bindings are behind shared references and stay read-only; they can
    /// only be observed through `lookup`'s copies.
    ///
    /// # Example
    /// ```
    /// use fracta::interpreter::{evaluator::scope::Scope, value::core::Value};
    ///
    /// let mut scope = Scope::root();
    /// scope.assign("x", Value::Integer(1));
    ///
    /// if let Some(value) = scope.lookup_mut("x") {
    ///     *value = Value::Integer(2);
    /// }
    /// assert_eq!(scope.lookup("x"), Some(Value::Integer(2)));
    ///
    /// let outer = scope;
    /// let mut inner = Scope::with_parent(&outer);
    /// // The parent's binding is not reachable for mutation.
    /// assert_eq!(inner.lookup_mut("x"), None);
    /// ```
    #[must_use]
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.variables.get_mut(name)
    }

    /// Binds `name` to `value` in this scope, overwriting any previous
    /// binding here. Parent bindings are shadowed, never modified.
    pub fn assign(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Registers a function declaration in this scope, replacing any earlier
    /// declaration with the same name.
    pub fn declare_function(&mut self, decl: FunctionDecl) {
        self.functions.insert(decl.name.clone(), decl);
    }

    /// Looks a function up, walking the parent chain.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&FunctionDecl> {
        self.functions
            .get(name)
            .or_else(|| self.parent.and_then(|parent| parent.function(name)))
    }
}
