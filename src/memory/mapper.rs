use std::cell::RefCell;
use std::ops::{Bound, RangeBounds};

use super::{Memory, ADDRESS_SPACE};

/// Bank-switching dispatcher for non-contiguous memory ranges.
///
/// Each mapped range forwards fetches and stores to a shared sub-bus; the
/// sub-bus sees the untranslated address, so a device mapped away from
/// zero is usually wrapped in [`super::Masked`]. Accesses outside every
/// range read the `zero` fill byte and drop writes.
///
/// Ranges may overlap. Lookups hit the first range containing the
/// address, and the range list is kept sorted so that a range entirely
/// contained in another comes first: the narrower mapping wins, with
/// insertion order breaking ties.
///
/// Range bounds follow the caller: `map(0x8000..0xC000, …)` and
/// `map(0x8000..=0xBFFF, …)` are the same mapping, and `map(.., …)`
/// covers the whole 64 KiB space.
pub struct Mapper<'a> {
    /// Fill byte returned for unmapped reads.
    pub zero: u8,

    ranges: Vec<MappedRange<'a>>,
}

struct MappedRange<'a> {
    start: u32,
    stop: u32, // exclusive
    memory: &'a RefCell<dyn Memory + 'a>,
}

impl<'a> Mapper<'a> {
    /// A mapper with the customary `0xFF` open-bus fill byte.
    pub fn new() -> Self {
        Self {
            zero: 0xFF,
            ranges: Vec::new(),
        }
    }

    /// Map `memory` over `range`.
    pub fn map<R>(&mut self, range: R, memory: &'a RefCell<dyn Memory + 'a>)
    where
        R: RangeBounds<u16>,
    {
        let start = match range.start_bound() {
            Bound::Included(&s) => s as u32,
            Bound::Excluded(&s) => s as u32 + 1,
            Bound::Unbounded => 0,
        };
        let stop = match range.end_bound() {
            Bound::Included(&e) => e as u32 + 1,
            Bound::Excluded(&e) => e as u32,
            Bound::Unbounded => ADDRESS_SPACE,
        };
        self.ranges.push(MappedRange {
            start,
            stop,
            memory,
        });
        // Narrower spans first; a contained range always has the smaller
        // span, so it sorts ahead of its container. The sort is stable,
        // keeping insertion order for equal spans.
        self.ranges.sort_by_key(|r| r.stop.saturating_sub(r.start));
    }

    /// Remove the first range backed by `memory`. Returns whether a range
    /// was found.
    pub fn unmap(&mut self, memory: &RefCell<dyn Memory + 'a>) -> bool {
        let target = memory as *const _ as *const ();
        match self
            .ranges
            .iter()
            .position(|r| r.memory as *const _ as *const () == target)
        {
            Some(i) => {
                self.ranges.remove(i);
                true
            }
            None => false,
        }
    }

    /// Drop all mappings.
    pub fn reset(&mut self) {
        self.ranges.clear();
    }

    fn bank(&self, addr: u16) -> Option<&'a RefCell<dyn Memory + 'a>> {
        let addr = addr as u32;
        self.ranges
            .iter()
            .find(|r| addr >= r.start && addr < r.stop)
            .map(|r| r.memory)
    }
}

impl Default for Mapper<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory for Mapper<'_> {
    fn fetch(&mut self, addr: u16) -> u8 {
        match self.bank(addr) {
            Some(memory) => memory.borrow_mut().fetch(addr),
            None => self.zero,
        }
    }

    fn store(&mut self, addr: u16, value: u8) {
        if let Some(memory) = self.bank(addr) {
            memory.borrow_mut().store(addr, value);
        }
    }
}
