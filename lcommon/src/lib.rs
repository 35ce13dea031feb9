//! Identifiers, future aliases, and an ordered registry shared by the larder crates.
//!
//! ```rust
//! use lcommon::{Registry, SessionId};
//!
//! let session = SessionId::from("shopper-7");
//!
//! let mut tools = Registry::new();
//! tools.insert("get_cart_and_stock_info".to_string(), 1_u8);
//!
//! assert_eq!(session.as_str(), "shopper-7");
//! assert_eq!(tools.keys().next().map(String::as_str), Some("get_cart_and_stock_info"));
//! ```

pub mod future {
    //! Boxed future alias used by the async tool and host contracts.
    //!
    //! ```rust
    //! use lcommon::BoxFuture;
    //!
    //! fn ready_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = ready_len("eggs");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod context {
    //! Call-scoped identifiers.

    use std::fmt::{Display, Formatter};

    macro_rules! string_id {
        ($(#[$meta:meta])* $name:ident) => {
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash)]
            pub struct $name(String);

            impl $name {
                pub fn new(value: impl Into<String>) -> Self {
                    Self(value.into())
                }

                pub fn as_str(&self) -> &str {
                    self.0.as_str()
                }
            }

            impl Display for $name {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<String> for $name {
                fn from(value: String) -> Self {
                    Self(value)
                }
            }

            impl From<&str> for $name {
                fn from(value: &str) -> Self {
                    Self(value.to_string())
                }
            }
        };
    }

    string_id!(
        /// Conversation the agent runtime is serving when it calls a tool.
        SessionId
    );
    string_id!(TraceId);
}

pub mod registry {
    //! Name-keyed registry that remembers insertion order.
    //!
    //! Hosts describe their tools in the order they were registered. Replacing an entry keeps
    //! its position; removing one shifts later entries up.
    //!
    //! ```rust
    //! use lcommon::Registry;
    //!
    //! let mut registry = Registry::new();
    //! registry.insert("zeta".to_string(), 1_u32);
    //! registry.insert("alpha".to_string(), 2_u32);
    //!
    //! let keys: Vec<_> = registry.keys().cloned().collect();
    //! assert_eq!(keys, vec!["zeta".to_string(), "alpha".to_string()]);
    //! ```

    use std::hash::Hash;

    use indexmap::{Equivalent, IndexMap};

    #[derive(Debug, Clone)]
    pub struct Registry<K, V> {
        items: IndexMap<K, V>,
    }

    impl<K, V> Default for Registry<K, V> {
        fn default() -> Self {
            Self {
                items: IndexMap::new(),
            }
        }
    }

    impl<K, V> Registry<K, V>
    where
        K: Eq + Hash,
    {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert(&mut self, key: K, value: V) -> Option<V> {
            self.items.insert(key, value)
        }

        pub fn get<Q>(&self, key: &Q) -> Option<&V>
        where
            Q: Hash + Equivalent<K> + ?Sized,
        {
            self.items.get(key)
        }

        pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
        where
            Q: Hash + Equivalent<K> + ?Sized,
        {
            self.items.shift_remove(key)
        }

        pub fn contains_key<Q>(&self, key: &Q) -> bool
        where
            Q: Hash + Equivalent<K> + ?Sized,
        {
            self.items.contains_key(key)
        }

        pub fn keys(&self) -> impl Iterator<Item = &K> {
            self.items.keys()
        }

        pub fn values(&self) -> impl Iterator<Item = &V> {
            self.items.values()
        }

        pub fn len(&self) -> usize {
            self.items.len()
        }

        pub fn is_empty(&self) -> bool {
            self.items.is_empty()
        }
    }
}

pub use context::{SessionId, TraceId};
pub use future::BoxFuture;
pub use registry::Registry;
