use crate::list::OrderedList;
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for OrderedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for OrderedList<T> {}

impl<T: PartialOrd> PartialOrd for OrderedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for OrderedList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for OrderedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        // Reuse the nodes we already have, then drop or append the difference.
        let mut elems = self.iter_mut();
        let mut elems_other = other.iter();
        let mut reused = 0;
        for (elem, elem_other) in (&mut elems).zip(&mut elems_other) {
            elem.clone_from(elem_other);
            reused += 1;
        }
        drop(elems);
        self.truncate(reused);
        self.extend(elems_other.cloned());
    }
}

impl<T: Hash> Hash for OrderedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

/// Writes the elements in order, separated by single spaces.
///
/// # Examples
///
/// ```
/// use ordered_list::OrderedList;
/// use std::iter::FromIterator;
///
/// let list = OrderedList::from_iter(["to", "be", "or", "not"]);
/// assert_eq!(format!("[{}]", list), "[to be or not]");
/// assert_eq!(OrderedList::<u8>::new().to_string(), "");
/// ```
impl<T: Display> Display for OrderedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            Display::fmt(first, f)?;
            for elt in iter {
                f.write_str(" ")?;
                Display::fmt(elt, f)?;
            }
        }
        Ok(())
    }
}

impl<T> OrderedList<T> {
    /// Returns `true` if the `OrderedList` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    ///
    /// list.add_end(0);
    /// list.add_end(1);
    /// list.add_end(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Renders the list for diagnostics: the elements in order, separated by
    /// single spaces. The same text is produced by the [`Display`] impl.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// list.add_front('A');
    /// list.add_front('B');
    /// list.add_end('C');
    /// assert_eq!(list.render(), "B A C");
    /// ```
    pub fn render(&self) -> String
    where
        T: Display,
    {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::OrderedList;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_compare() {
        let a = OrderedList::from_iter([1, 2, 3]);
        let b = OrderedList::from_iter([1, 2, 4]);
        let c = OrderedList::from_iter([1, 2]);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert!(a < b);
        assert!(c < a);
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Less);
        assert_eq!(hash_of(&a), hash_of(&a.clone()));
    }

    #[test]
    fn list_clone_from() {
        fn test_clone_from(target: &[i32], source: &[i32]) {
            let mut list = OrderedList::from_iter(target.iter().copied());
            let other = OrderedList::from_iter(source.iter().copied());
            list.clone_from(&other);
            assert_eq!(list, other);
            assert_eq!(list.len(), other.len());
        }
        test_clone_from(&[], &[]);
        test_clone_from(&[], &[1, 2]);
        test_clone_from(&[1, 2], &[]);
        test_clone_from(&[1, 2, 3], &[4, 5]);
        test_clone_from(&[1, 2], &[4, 5, 6]);
        test_clone_from(&[1, 2, 3], &[4, 5, 6]);
    }

    #[test]
    fn list_render() {
        let mut list = OrderedList::<i32>::new();
        assert_eq!(list.render(), "");
        list.add_end(7);
        assert_eq!(list.render(), "7");
        list.extend([8, 9]);
        assert_eq!(list.render(), "7 8 9");
        assert_eq!(format!("{:?}", list), "[7, 8, 9]");
    }

    #[test]
    fn list_contains() {
        let list = OrderedList::from_iter("hello".chars());
        assert!(list.contains(&'l'));
        assert!(!list.contains(&'z'));
    }
}
