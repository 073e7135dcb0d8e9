//! Memory Allocator Configuration
//!
//! The binary uses mimalloc in place of the system allocator. Audits of large
//! user tables allocate one short string per line, which mimalloc handles
//! with less fragmentation than the default allocator.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
