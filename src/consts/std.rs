//! Std library declarations.

use crate::consts::Consts;
use core::cell::RefCell;

thread_local! {

    /// Thread-local constants cache.
    pub static CONSTS: RefCell<Consts> = RefCell::new(
        Consts::new().expect("Failed to initialize the thread-local constants cache")
    );
}
