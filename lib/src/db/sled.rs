use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{error::ErrorKind, Result};

use super::{decode, encode, key_bytes, Collectable, Identifiable, Key};

#[derive(Clone, Debug)]
pub struct SledDb {
    inner: sled::Db,
}

impl SledDb {
    /// Opens (or creates) the database at the given directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let inner = sled::Config::default().path(path).open()?;
        Ok(Self { inner })
    }

    /// Opens a database that lives only as long as the handle.
    pub fn temporary() -> Result<Self> {
        let inner = sled::Config::default().temporary(true).open()?;
        Ok(Self { inner })
    }

    pub fn get_collection<T: DeserializeOwned + Collectable>(&self) -> Result<Vec<T>> {
        let tree = self.inner.open_tree(T::get_collection_name())?;
        let mut out = Vec::new();
        for entry in tree.iter() {
            let (_, value_bytes) = entry?;
            out.push(decode(&value_bytes)?);
        }
        Ok(out)
    }

    /// Returns the length of the collection as defined for the specified type.
    pub fn len<T: Collectable>(&self) -> Result<usize> {
        Ok(self.inner.open_tree(T::get_collection_name())?.len())
    }

    /// Gets an item from the collection defined for the item type.
    pub fn get<T: DeserializeOwned + Collectable>(&self, id: Key) -> Result<T> {
        self.find::<T>(id)?.ok_or_else(|| {
            ErrorKind::NotFound(format!(
                "entity with id '{}' in collection {}",
                id,
                T::get_collection_name()
            ))
            .into()
        })
    }

    /// Same as `get` but a missing entry is not an error.
    pub fn find<T: DeserializeOwned + Collectable>(&self, id: Key) -> Result<Option<T>> {
        let tree = self.inner.open_tree(T::get_collection_name())?;
        match tree.get(key_bytes(id))? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    pub fn set<T: Serialize + Identifiable + Collectable>(&self, value: &T) -> Result<()> {
        let tree = self.inner.open_tree(T::get_collection_name())?;
        let encoded = encode(value)?;
        tree.insert(key_bytes(value.get_id()), encoded)?;
        Ok(())
    }

    pub fn remove<T: Identifiable + Collectable>(&self, value: &T) -> Result<()> {
        let tree = self.inner.open_tree(T::get_collection_name())?;
        tree.remove(key_bytes(value.get_id()))?;
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: u64,
        note: String,
    }

    impl Collectable for Entry {
        fn get_collection_name() -> &'static str {
            "entry"
        }
    }

    impl Identifiable for Entry {
        fn get_id(&self) -> Key {
            self.id
        }
    }

    #[test]
    fn set_get_remove() {
        let db = SledDb::temporary().unwrap();
        let entry = Entry {
            id: 7,
            note: "seven".to_string(),
        };
        db.set(&entry).unwrap();
        assert_eq!(db.get::<Entry>(7).unwrap(), entry);
        assert_eq!(db.len::<Entry>().unwrap(), 1);

        db.remove(&entry).unwrap();
        assert!(db.find::<Entry>(7).unwrap().is_none());
        assert!(matches!(
            db.get::<Entry>(7).unwrap_err().kind,
            ErrorKind::NotFound(_)
        ));
    }

    #[test]
    fn collection_is_ordered_by_key() {
        let db = SledDb::temporary().unwrap();
        for id in [300, 2, 41] {
            db.set(&Entry {
                id,
                note: String::new(),
            })
            .unwrap();
        }
        let ids: Vec<u64> = db
            .get_collection::<Entry>()
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![2, 41, 300]);
    }
}
