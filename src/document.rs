//! Document root presentation classes.

use std::collections::BTreeSet;

/// Mutates the marker classes on a document's root element.
///
/// Stylesheets key dark styling off a single class; the manager only ever
/// adds or removes that one class.
pub trait DocumentRoot {
    fn add_class(&mut self, class: &str);

    fn remove_class(&mut self, class: &str);

    fn has_class(&self, class: &str) -> bool;

    /// Adds `class` when `enabled`, removes it otherwise.
    fn toggle_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

impl<D: DocumentRoot + ?Sized> DocumentRoot for &mut D {
    fn add_class(&mut self, class: &str) {
        (**self).add_class(class)
    }

    fn remove_class(&mut self, class: &str) {
        (**self).remove_class(class)
    }

    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }
}

/// An in-memory class list, standing in for a root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: BTreeSet<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classes in sorted order, space-separated like a `class` attribute.
    pub fn to_attribute(&self) -> String {
        self.classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            classes: iter.into_iter().map(|c| c.as_ref().to_string()).collect(),
        }
    }
}

impl DocumentRoot for ClassList {
    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut root = ClassList::new();
        root.toggle_class("dark", true);
        assert!(root.has_class("dark"));

        root.toggle_class("dark", false);
        assert!(!root.has_class("dark"));
        assert!(root.is_empty());
    }

    #[test]
    fn test_toggle_twice_is_stable() {
        let mut root = ClassList::new();
        root.toggle_class("dark", true);
        root.toggle_class("dark", true);
        assert_eq!(root.len(), 1);
    }

    #[test]
    fn test_other_classes_untouched() {
        let mut root: ClassList = ["antialiased", "dark"].into_iter().collect();
        root.toggle_class("dark", false);
        assert_eq!(root.to_attribute(), "antialiased");
    }

    #[test]
    fn test_remove_missing_class_is_noop() {
        let mut root = ClassList::new();
        root.remove_class("dark");
        assert!(root.is_empty());
    }
}
