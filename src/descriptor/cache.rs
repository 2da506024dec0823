//! Process-wide descriptor cache, keyed by `TypeId`

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::core::errors::Result;
use crate::core::traits::FixedLength;
use crate::descriptor::FixedLengthDescriptor;

static CACHE: OnceLock<Mutex<HashMap<TypeId, Arc<FixedLengthDescriptor>>>> = OnceLock::new();

/// Resolves (once) and returns the cached descriptor for `T`.
///
/// Insertion is guarded by a mutex so concurrent first callers cannot race
/// the memoization; later callers see the same `Arc`.
pub fn descriptor_of<T: FixedLength + 'static>() -> Result<Arc<FixedLengthDescriptor>> {
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut map = cache.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(descriptor) = map.get(&TypeId::of::<T>()) {
        return Ok(Arc::clone(descriptor));
    }
    let descriptor = Arc::new(T::structural_type().resolve()?);
    map.insert(TypeId::of::<T>(), Arc::clone(&descriptor));
    Ok(descriptor)
}
