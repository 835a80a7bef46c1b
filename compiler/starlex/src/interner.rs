//! Process-wide sharded identifier interner.
//!
//! Follows `ori_ir::name`/`ori_ir::interner` directly: a 32-bit `Name`
//! split into a 4-bit shard and 28-bit local index,
//! backed by `parking_lot::RwLock`-guarded shards keyed by
//! `rustc_hash::FxHashMap`. Scaled down per §4.F: `starlex` is the
//! only consumer, so `Name` lives directly in this module rather than in a
//! separate IR crate, and there is no Salsa `cache`-feature serde impl.
//!
//! §9's "may use a plain hash set or skip interning" is honored by keeping
//! `Name` equality text-based in spirit (two `Name`s from the same
//! `StringInterner` compare equal iff their text does). `Lexer::new`'s
//! signature (§6) carries no interner parameter, so `Lexer` interns
//! identifiers through [`global()`], a process-wide singleton rather than a
//! borrowed instance per call site — the pool is append-only and safe to
//! share across every `Lexer` in the process (§5).

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// Interned identifier: a 32-bit shard+local index pair.
///
/// Two `Name`s are equal iff they were interned from the same text by the
/// same `StringInterner` (or two interners that happened to assign the same
/// shard/local slot, which this type does not attempt to prevent — compare
/// text via `StringInterner::lookup` across interners instead).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    const MAX_LOCAL: u32 = 0x0FFF_FFFF;
    const NUM_SHARDS: usize = 16;

    #[inline]
    const fn new(shard: u32, local: u32) -> Self {
        debug_assert!(shard < 16);
        debug_assert!(local <= Self::MAX_LOCAL);
        Name((shard << 28) | local)
    }

    #[inline]
    const fn shard(self) -> usize {
        (self.0 >> 28) as usize
    }

    #[inline]
    const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name(shard={}, local={})", self.shard(), self.local())
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}

struct InternShard {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::new(),
        }
    }

    fn with_empty() -> Self {
        let mut shard = Self::new();
        let empty: &'static str = "";
        shard.map.insert(empty, 0);
        shard.strings.push(empty);
        shard
    }
}

/// Process-wide identifier pool: safe for concurrent insertion from
/// independent lexer instances, per §5. A monotonically growing pool
/// (strings are leaked for `'static` storage) — acceptable per §9, since a
/// weak/reclaimable pool is a desirable optimization, not a correctness
/// requirement, in size-bounded contexts like a single compilation unit.
pub struct StringInterner {
    shards: [RwLock<InternShard>; Name::NUM_SHARDS],
}

impl StringInterner {
    #[must_use]
    pub fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(InternShard::with_empty())
            } else {
                RwLock::new(InternShard::new())
            }
        });
        Self { shards }
    }

    #[inline]
    fn shard_for(s: &str) -> usize {
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % Name::NUM_SHARDS
    }

    /// Intern `s`, returning its `Name`. Idempotent: interning the same text
    /// twice (from this interner) returns the same `Name`.
    pub fn intern(&self, s: &str) -> Name {
        if s.is_empty() {
            return Name::EMPTY;
        }

        let shard_idx = Self::shard_for(s);
        let shard_idx_u32 = shard_idx as u32;
        let shard = &self.shards[shard_idx];

        {
            let guard = shard.read();
            if let Some(&local) = guard.map.get(s) {
                return Name::new(shard_idx_u32, local);
            }
        }

        let mut guard = shard.write();
        if let Some(&local) = guard.map.get(s) {
            return Name::new(shard_idx_u32, local);
        }

        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let local = u32::try_from(guard.strings.len())
            .unwrap_or_else(|_| panic!("interner shard {shard_idx} exceeded u32::MAX strings"));
        guard.strings.push(leaked);
        guard.map.insert(leaked, local);

        Name::new(shard_idx_u32, local)
    }

    /// Resolve a `Name` back to its text. Panics if `name` was not produced
    /// by this interner.
    #[must_use]
    pub fn lookup(&self, name: Name) -> &str {
        let shard = self.shards[name.shard()].read();
        // Entries are `&'static str` (leaked on insert) and never removed,
        // so this is a plain copy of the reference, not a borrow of `shard`.
        shard.strings[name.local()]
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide interner every [`crate::Lexer`] interns identifiers
/// through, initialized on first use.
pub fn global() -> &'static StringInterner {
    static GLOBAL: OnceLock<StringInterner> = OnceLock::new();
    GLOBAL.get_or_init(StringInterner::new)
}
