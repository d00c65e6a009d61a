//! Flat buffer protocol for zero-copy transfer of a pagination view
//!
//! ## u32 Buffer Layout:
//! ```text
//! Header:
//! [0]     MAGIC (0x50574E44 = "PWND" for validation)
//! [1]     SCHEMA_VERSION (protocol version, currently 1)
//! [2]     page
//! [3]     page_count
//! [4]     flags: bit0=is_first_page, bit1=is_last_page, bit2=simple
//! [5]     control_count
//! [6]     page_item_count
//! [7]     label_buffer_len
//! [8]     u32_page_offset (index where page items start, 0 if none)
//! [9..]   controls, in display order
//!
//! Per-control:
//!   [kind, disabled, target, label_offset, label_len, label_utf16_offset, label_utf16_len]
//!     kind: 0=first, 1=prev, 2=next, 3=last
//!     label_offset/label_len: byte offsets in label_data (UTF-8)
//!     label_utf16_offset/label_utf16_len: offsets for JS substring (after single decode)
//!
//! At u32_page_offset (if page_item_count > 0):
//!   Per-page: [number, active]
//! ```
//!
//! Leading controls (first/prev) precede the page run on screen and trailing
//! ones follow it; `NavControl::is_leading` on the kind tells them apart.

use crate::view::{NavControl, PageItem, PaginationView};

/// Magic number for format validation: "PWND" (Page WiNDow)
pub const MAGIC: u32 = 0x5057_4E44;

/// Schema version for protocol compatibility checking
pub const SCHEMA_VERSION: u32 = 1;

/// Header size in u32 elements
pub const HEADER_SIZE: usize = 9;

/// Flags bitmask
pub const FLAG_FIRST_PAGE: u32 = 0b001;
pub const FLAG_LAST_PAGE: u32 = 0b010;
pub const FLAG_SIMPLE: u32 = 0b100;

/// Number of u32 values per control
pub const U32_PER_CONTROL: usize = 7;

/// Number of u32 values per page item
pub const U32_PER_PAGE: usize = 2; // number, active

/// Pending page item (written to the buffer in finalize())
struct PendingPage {
    number: u32,
    active: bool,
}

/// View buffer for zero-copy WASM transfer
pub struct ViewBuffer {
    /// Integer data (header, controls, pages)
    pub u32_data: Vec<u32>,
    /// UTF-8 label buffer
    pub label_data: Vec<u8>,

    pending_pages: Vec<PendingPage>,
    control_count: u32,

    // Cumulative UTF-16 offset for efficient JS decoding
    utf16_label_offset: usize,
}

impl Default for ViewBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewBuffer {
    pub fn new() -> Self {
        Self {
            u32_data: Vec::with_capacity(64),
            label_data: Vec::with_capacity(64),
            pending_pages: Vec::new(),
            control_count: 0,
            utf16_label_offset: 0,
        }
    }

    pub fn clear(&mut self) {
        self.u32_data.clear();
        self.label_data.clear();
        self.pending_pages.clear();
        self.control_count = 0;
        self.utf16_label_offset = 0;
    }

    /// Clear and reserve room for `controls` controls and `pages` page items
    pub fn prepare(&mut self, controls: usize, pages: usize, label_bytes: usize) {
        self.clear();
        self.u32_data
            .reserve(HEADER_SIZE + controls * U32_PER_CONTROL + pages * U32_PER_PAGE);
        self.label_data.reserve(label_bytes);
        self.pending_pages.reserve(pages);
    }

    /// Write header; counts and offsets are filled in by finalize()
    pub fn write_header(&mut self, page: u32, page_count: u32, flags: u32) {
        self.u32_data.push(MAGIC);          // [0] magic number
        self.u32_data.push(SCHEMA_VERSION); // [1] schema version
        self.u32_data.push(page);           // [2] page
        self.u32_data.push(page_count);     // [3] page_count
        self.u32_data.push(flags);          // [4] flags
        self.u32_data.push(0);              // [5] control_count (placeholder)
        self.u32_data.push(0);              // [6] page_item_count (placeholder)
        self.u32_data.push(0);              // [7] label_buffer_len (placeholder)
        self.u32_data.push(0);              // [8] u32_page_offset (placeholder)
    }

    /// Write a navigation control
    pub fn write_control(&mut self, control: NavControl, label: &str, disabled: bool, target: u32) {
        let label_offset = self.label_data.len() as u32;
        self.label_data.extend_from_slice(label.as_bytes());
        let label_len = label.len() as u32;

        let label_utf16_offset = self.utf16_label_offset as u32;
        let label_utf16_len = label.chars().map(char::len_utf16).sum::<usize>() as u32;
        self.utf16_label_offset += label_utf16_len as usize;

        self.u32_data.push(control.code());
        self.u32_data.push(u32::from(disabled));
        self.u32_data.push(target);
        self.u32_data.push(label_offset);
        self.u32_data.push(label_len);
        self.u32_data.push(label_utf16_offset);
        self.u32_data.push(label_utf16_len);
        self.control_count += 1;
    }

    /// Queue a page item; pages are laid out after all controls
    pub fn write_page(&mut self, number: u32, active: bool) {
        self.pending_pages.push(PendingPage { number, active });
    }

    /// Write pending pages and synchronize the header.
    /// Must be called after all controls and pages are written.
    pub fn finalize(&mut self) {
        if self.u32_data.len() < HEADER_SIZE {
            return;
        }

        self.u32_data[5] = self.control_count;

        if self.pending_pages.is_empty() {
            self.u32_data[6] = 0;
            self.u32_data[8] = 0;
        } else {
            self.u32_data[8] = self.u32_data.len() as u32;
            for page in &self.pending_pages {
                self.u32_data.push(page.number);
                self.u32_data.push(u32::from(page.active));
            }
            self.u32_data[6] = self.pending_pages.len() as u32;
            self.pending_pages.clear();
        }

        self.u32_data[7] = self.label_data.len() as u32;

        #[cfg(debug_assertions)]
        self.validate_label_offsets();
    }

    /// Validate that all label ranges are within bounds (debug builds only)
    #[cfg(debug_assertions)]
    fn validate_label_offsets(&self) {
        let control_count = self.u32_data[5] as usize;
        let label_len = self.label_data.len();

        for idx in 0..control_count {
            let base = HEADER_SIZE + idx * U32_PER_CONTROL;
            if base + U32_PER_CONTROL > self.u32_data.len() {
                break;
            }
            let offset = self.u32_data[base + 3] as usize;
            let len = self.u32_data[base + 4] as usize;
            debug_assert!(
                offset + len <= label_len,
                "Invalid label range for control {}: offset {} + length {} > label buffer size {}",
                idx, offset, len, label_len
            );
        }
    }

    /// Encode a whole view, replacing the buffer contents
    pub fn encode(&mut self, view: &PaginationView) {
        let controls = view.controls().count();
        let pages = view.items.len() - controls;
        let label_bytes = view
            .controls()
            .map(|item| match item {
                PageItem::Control { label, .. } => label.len(),
                PageItem::Page { .. } => 0,
            })
            .sum();
        self.prepare(controls, pages, label_bytes);

        let mut flags = view.flags.bits();
        if view.simple {
            flags |= FLAG_SIMPLE;
        }
        self.write_header(view.page, view.page_count, flags);

        for item in &view.items {
            match item {
                PageItem::Control {
                    control,
                    label,
                    disabled,
                    target,
                } => self.write_control(*control, label, *disabled, *target),
                PageItem::Page { number, active } => self.write_page(*number, *active),
            }
        }

        self.finalize();
    }
}
