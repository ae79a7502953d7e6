use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use collections::{CharStringMap, Removal};

// Counts live heap bytes of the current thread only,
// so the test harness's own allocations never show up.
#[global_allocator]
static ALLOCATOR: AllocationTracker = AllocationTracker;

thread_local! {
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
}

struct AllocationTracker;

fn track(delta: isize) {
    let _ = LIVE_BYTES.try_with(|live| live.set(live.get() + delta));
}

unsafe impl GlobalAlloc for AllocationTracker {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            track(layout.size() as isize);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        track(-(layout.size() as isize));
    }
}

fn live_bytes() -> isize {
    LIVE_BYTES.with(Cell::get)
}

/// Runs `f` and returns how many bytes it left allocated
fn leaked_by(f: impl FnOnce()) -> isize {
    let before = live_bytes();
    f();
    live_bytes() - before
}

#[test]
fn teardown_releases_everything() {
    // empty
    assert_eq!(leaked_by(|| drop(CharStringMap::new())), 0);

    // every printable key, long values, collisions in every bucket
    let leaked = leaked_by(|| {
        let mut map = CharStringMap::new();
        for key in ' '..='~' {
            map.insert(key, key.to_string().repeat(64));
        }
        assert_eq!(map.len(), 95);
        drop(map);
    });
    assert_eq!(leaked, 0);

    // overwritten values and removed entries are released as well
    let leaked = leaked_by(|| {
        let mut map = CharStringMap::new();
        for round in 0..10 {
            for key in 'A'..='z' {
                map.insert(key, format!("{key}{round}"));
            }
        }
        for key in 'A'..='Z' {
            assert_eq!(map.remove(key), Removal::Removed);
        }
        assert_eq!(map.remove('A'), Removal::NotFound);
        drop(map);
    });
    assert_eq!(leaked, 0);

    // a single bucket holding one long chain
    let leaked = leaked_by(|| {
        let mut map = CharStringMap::with_buckets(1).unwrap();
        for code in 0..2_000u32 {
            let key = char::from_u32(0x4e00 + code).unwrap();
            map.insert(key, "chained");
        }
        assert_eq!(map.chain_len(0), Some(2_000));
    });
    assert_eq!(leaked, 0);
}
