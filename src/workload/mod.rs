/*!
 * Workload
 * Pure units of read/write work against the shared map
 *
 * A reader pass looks up a scattered key and burns a fixed number of
 * spin units; a writer pass burns its spin units and then stores the
 * stringified key. The workload performs no locking of its own - a
 * strategy's guards wrap these functions.
 */

mod map;
mod ops;
mod spin;

pub use map::SharedMap;
pub use ops::{next_tick, read_pass, scatter_key, write_pass, WorkloadProfile};
pub use spin::spin_work;
