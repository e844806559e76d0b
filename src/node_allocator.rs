use std::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use std::ptr;
use std::ptr::NonNull;

use crate::{CACHE_LINE_SIZE, node::Node};

/// Layout for a single node, rounded up to the cache line size so adjacent
/// allocations never share a line.
fn node_layout() -> Layout {
    let node_size = std::mem::size_of::<Node>();

    // Round up to cache line size
    let aligned_size = (node_size + *CACHE_LINE_SIZE - 1) & !(*CACHE_LINE_SIZE - 1);

    Layout::from_size_align(aligned_size, *CACHE_LINE_SIZE).unwrap()
}

/// Allocate a node carrying `id`, with its successor pointer nulled.
///
/// Allocation exhaustion aborts the process; the fixture does not model it
/// as a recoverable condition.
pub(crate) fn allocate(id: i32) -> NonNull<Node> {
    let layout = node_layout();

    let raw = unsafe { alloc(layout) as *mut Node };
    let Some(node) = NonNull::new(raw) else {
        handle_alloc_error(layout)
    };

    unsafe {
        node.as_ptr().write(Node {
            id,
            next: ptr::null_mut(),
        });
    }

    node
}

/// Release a node's storage.
///
/// # Safety
///
/// `node` must have been produced by [`allocate`] and not deallocated since.
pub(crate) unsafe fn deallocate(node: NonNull<Node>) {
    unsafe { dealloc(node.as_ptr() as *mut u8, node_layout()) }
}
