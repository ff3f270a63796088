//! Ordered collection of components for one field key

use crate::component::{Category, Component};
use std::ops::{Deref, DerefMut};
use tessera_core::ConstrainedList;

/// Components stored under one field key, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ComponentSet {
    items: ConstrainedList<Box<dyn Component>>,
}

impl ComponentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_component<C: Component + 'static>(&mut self, component: C) {
        self.items.push(Box::new(component));
    }

    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|c| c.name()).collect()
    }

    /// First component named `name`
    pub fn find(&self, name: &str) -> Option<&dyn Component> {
        self.items.iter().find(|c| c.name() == name).map(|c| &**c)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut (dyn Component + 'static)> {
        self.items.iter_mut().find(|c| c.name() == name).map(|c| &mut **c)
    }

    /// Remove exactly the first component named `name`.
    pub fn remove_named(&mut self, name: &str) -> Option<Box<dyn Component>> {
        self.items.remove_first(|c| c.name() == name)
    }

    pub fn contains_category(&self, category: Category) -> bool {
        self.items.iter().any(|c| category.matches(&**c))
    }

    /// Components of kind `C`, downcast
    pub fn of_kind<C: Component + 'static>(&self) -> impl Iterator<Item = &C> + '_ {
        self.items.iter().filter_map(|c| c.downcast_ref::<C>())
    }
}

impl Deref for ComponentSet {
    type Target = ConstrainedList<Box<dyn Component>>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl DerefMut for ComponentSet {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl FromIterator<Box<dyn Component>> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = Box<dyn Component>>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a ComponentSet {
    type Item = &'a Box<dyn Component>;
    type IntoIter = std::slice::Iter<'a, Box<dyn Component>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentBase;
    use std::any::Any;
    use tessera_core::CoreError;

    #[derive(Debug, Clone)]
    struct Note {
        base: ComponentBase,
    }

    impl Note {
        fn new(name: &str) -> Self {
            Self { base: ComponentBase::new(name) }
        }
    }

    impl Component for Note {
        fn base(&self) -> &ComponentBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut ComponentBase {
            &mut self.base
        }
    }

    #[derive(Debug, Clone)]
    struct Flag {
        base: ComponentBase,
    }

    crate::component!(Flag);

    #[test]
    fn test_component_set_keeps_order() {
        let mut set = ComponentSet::new();
        set.push_component(Note::new("contrib1"));
        set.push_component(Note::new("contrib2"));
        assert_eq!(set.len(), 2);
        assert_eq!(set[0].name(), "contrib1");
        assert_eq!(set[1].name(), "contrib2");
        assert_eq!(set.names(), vec!["contrib1", "contrib2"]);
    }

    #[test]
    fn test_remove_named_takes_first_match_only() {
        let mut set = ComponentSet::new();
        set.push_component(Note::new("dup"));
        set.push_component(Flag { base: ComponentBase::new("dup") });

        let removed = set.remove_named("dup").unwrap();
        assert!(removed.is::<Note>());
        assert_eq!(set.len(), 1);
        assert!(set[0].is::<Flag>());
        assert!(set.remove_named("missing").is_none());
    }

    #[test]
    fn test_contains_category_and_of_kind() {
        let mut set = ComponentSet::new();
        set.push_component(Note::new("a"));
        set.push_component(Flag { base: ComponentBase::new("b") });
        set.push_component(Note::new("c"));

        assert!(set.contains_category(Category::of::<Flag>()));
        let notes: Vec<&str> = set.of_kind::<Note>().map(|n| n.name()).collect();
        assert_eq!(notes, vec!["a", "c"]);
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut set = ComponentSet::new();
        set.push_component(Note::new("a"));
        set.find_mut("a").unwrap().attach("owner");
        assert_eq!(set.find("a").unwrap().owner(), Some("owner"));
        assert!(set.find("b").is_none());
    }

    #[test]
    fn test_push_any_rejects_non_component() {
        let mut set = ComponentSet::new();
        let err = set.push_any(Box::new(42_u32) as Box<dyn Any>).unwrap_err();
        assert!(matches!(err, CoreError::TypeConstraintViolation { position: 0, .. }));
        assert!(set.is_empty());

        let component: Box<dyn Component> = Box::new(Note::new("ok"));
        set.push_any(Box::new(component)).unwrap();
        assert_eq!(set.names(), vec!["ok"]);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut set = ComponentSet::new();
        set.push_component(Note::new("a"));
        let copy = set.clone();
        set.find_mut("a").unwrap().attach("changed");
        assert_eq!(copy.find("a").unwrap().owner(), None);
    }
}
