//! C ABI surface for the foreign benchmark harness.
//!
//! Mirrors the `queues.h` contract the harness links against: queues and
//! nodes cross the boundary as raw pointers, `pop` hands node ownership to
//! the caller, and `delete_node` reports 0 for success and 1 for a missing
//! position. Nodes handed out by [`pop`] come from this crate's allocator
//! and must be released with [`free_node`], never the platform `free`.

use std::ffi::c_int;
use std::ptr;

use crate::linked_queue::LinkedQueue;
use crate::node::{Node, OwnedNode};

/// Creates an empty queue and transfers its ownership to the caller.
///
/// Release it with [`clear_queue`].
#[unsafe(no_mangle)]
pub extern "C" fn create_queue() -> *mut LinkedQueue {
    Box::into_raw(Box::new(LinkedQueue::new()))
}

/// Creates and appends a node holding `id` to the tail of `queue`.
///
/// # Safety
///
/// `queue` must be a live pointer obtained from [`create_queue`], with no
/// other reference to it active during the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn push(queue: *mut LinkedQueue, id: c_int) {
    unsafe { &mut *queue }.push(id);
}

/// Detaches the head node of `queue` and transfers its ownership to the
/// caller. Returns null when the queue is empty. The caller must release the
/// node with [`free_node`].
///
/// # Safety
///
/// `queue` must be a live pointer obtained from [`create_queue`], with no
/// other reference to it active during the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pop(queue: *mut LinkedQueue) -> *mut Node {
    match unsafe { &mut *queue }.pop() {
        Some(node) => node.into_raw(),
        None => ptr::null_mut(),
    }
}

/// Removes and releases the node at zero-based `position` from `queue`.
/// Returns 0 on success, 1 if there is no node at that position.
///
/// # Safety
///
/// `queue` must be a live pointer obtained from [`create_queue`], with no
/// other reference to it active during the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn delete_node(queue: *mut LinkedQueue, position: c_int) -> c_int {
    let Ok(position) = usize::try_from(position) else {
        return 1;
    };

    match unsafe { &mut *queue }.delete_node(position) {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Releases every node of `queue` and the queue itself. The pointer must not
/// be used again after this call.
///
/// # Safety
///
/// `queue` must be a live pointer obtained from [`create_queue`], with no
/// other reference to it active during or after the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn clear_queue(queue: *mut LinkedQueue) {
    if queue.is_null() {
        return;
    }
    drop(unsafe { Box::from_raw(queue) });
}

/// Prints the identifiers of `queue` in head-to-tail order to stdout.
///
/// # Safety
///
/// `queue` must be a live pointer obtained from [`create_queue`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn print_queue(queue: *const LinkedQueue) {
    unsafe { &*queue }.print();
}

/// Releases a node obtained from [`pop`]. Null is a no-op.
///
/// # Safety
///
/// `node` must be null or a pointer returned by [`pop`] that has not been
/// freed since.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_node(node: *mut Node) {
    drop(unsafe { OwnedNode::from_raw(node) });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_the_c_surface() {
        unsafe {
            let queue = create_queue();

            push(queue, 1);
            push(queue, 2);
            push(queue, 3);

            let node = pop(queue);
            assert!(!node.is_null());
            assert_eq!((*node).id(), 1);
            free_node(node);

            assert_eq!(delete_node(queue, 0), 0);
            assert_eq!((*queue).iter().collect::<Vec<_>>(), [3]);

            clear_queue(queue);
        }
    }

    #[test]
    fn pop_on_empty_returns_null() {
        unsafe {
            let queue = create_queue();
            assert!(pop(queue).is_null());
            clear_queue(queue);
        }
    }

    #[test]
    fn delete_error_codes() {
        unsafe {
            let queue = create_queue();
            push(queue, 10);

            assert_eq!(delete_node(queue, 5), 1);
            assert_eq!(delete_node(queue, -1), 1);
            assert_eq!((*queue).len(), 1);

            assert_eq!(delete_node(queue, 0), 0);
            assert_eq!((*queue).len(), 0);

            clear_queue(queue);
        }
    }

    #[test]
    fn free_node_accepts_null() {
        unsafe { free_node(ptr::null_mut()) };
    }

    #[test]
    fn clear_queue_accepts_null() {
        unsafe { clear_queue(ptr::null_mut()) };
    }
}
