//! WASM bindings for the pagination core

pub mod flat_buffer;

use crate::config::PaginationConfig;
use crate::items::ItemRange;
use crate::state::PageCountSource;
use crate::view::{NavControl, PaginationView};
use crate::window;
use flat_buffer::ViewBuffer;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Visible page numbers around `page`
#[wasm_bindgen(js_name = computeWindow)]
pub fn compute_window(page: u32, page_count: u32, page_padding: u32) -> Vec<u32> {
    window::compute_window(page, page_count, page_padding)
        .pages
        .into_vec()
}

/// Boundary flags packed as bit 0 = first page, bit 1 = last page
#[wasm_bindgen(js_name = boundaryFlags)]
pub fn boundary_flags(page: u32, page_count: u32) -> u32 {
    window::compute_boundary_flags(page, page_count).bits()
}

#[wasm_bindgen(js_name = firstPage)]
pub fn first_page() -> u32 {
    window::first_page()
}

#[wasm_bindgen(js_name = prevPage)]
pub fn prev_page(page: u32) -> u32 {
    window::prev_page(page)
}

#[wasm_bindgen(js_name = nextPage)]
pub fn next_page(page: u32, page_count: u32) -> u32 {
    window::next_page(page, page_count)
}

#[wasm_bindgen(js_name = lastPage)]
pub fn last_page(page_count: u32) -> u32 {
    window::last_page(page_count)
}

/// `ceil(total_count / items_per_page)`
#[wasm_bindgen(js_name = pageCountFor)]
pub fn page_count_for(total_count: u32, items_per_page: u32) -> Result<u32, JsError> {
    Ok(PageCountSource::items(total_count, items_per_page).page_count()?)
}

/// WASM-exposed pagination control
#[wasm_bindgen]
pub struct WasmPagination {
    config: PaginationConfig,
    buffer: ViewBuffer,
}

#[wasm_bindgen]
impl WasmPagination {
    /// Create with default settings (padding 2, 10 items per page)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_config(PaginationConfig::default())
    }

    /// Create from a JSON config object
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<WasmPagination, JsError> {
        Ok(Self::with_config(PaginationConfig::from_json(json)?))
    }

    #[wasm_bindgen(getter, js_name = pagePadding)]
    pub fn page_padding(&self) -> u32 {
        self.config.page_padding
    }

    #[wasm_bindgen(getter, js_name = itemsPerPage)]
    pub fn items_per_page(&self) -> u32 {
        self.config.items_per_page
    }

    /// View for an explicit page count (returns JSON)
    pub fn render(&self, page: u32, page_count: u32) -> Result<String, JsError> {
        let state = self.config.state(page, page_count);
        Ok(PaginationView::build(&state, &self.config).to_json()?)
    }

    /// View with the page count derived from an item total (returns JSON)
    #[wasm_bindgen(js_name = renderItems)]
    pub fn render_items(&self, page: u32, total_count: u32) -> Result<String, JsError> {
        let state = self.config.state_for_items(page, total_count)?;
        Ok(PaginationView::build(&state, &self.config).to_json()?)
    }

    /// Encode the view into the flat buffer, returning a copy of the u32 data
    #[wasm_bindgen(js_name = renderBuffer)]
    pub fn render_buffer(&mut self, page: u32, page_count: u32) -> Vec<u32> {
        let state = self.config.state(page, page_count);
        self.buffer.encode(&PaginationView::build(&state, &self.config));
        self.buffer.u32_data.clone()
    }

    /// UTF-8 labels referenced by the last `renderBuffer` call
    #[wasm_bindgen(js_name = labelBuffer)]
    pub fn label_buffer(&self) -> Vec<u8> {
        self.buffer.label_data.clone()
    }

    /// Pointer to the u32 data for zero-copy reads from wasm memory
    #[wasm_bindgen(js_name = u32Ptr)]
    pub fn u32_ptr(&self) -> *const u32 {
        self.buffer.u32_data.as_ptr()
    }

    #[wasm_bindgen(js_name = u32Len)]
    pub fn u32_len(&self) -> usize {
        self.buffer.u32_data.len()
    }

    /// Pointer to the label bytes for zero-copy reads from wasm memory
    #[wasm_bindgen(js_name = labelPtr)]
    pub fn label_ptr(&self) -> *const u8 {
        self.buffer.label_data.as_ptr()
    }

    #[wasm_bindgen(js_name = labelLen)]
    pub fn label_len(&self) -> usize {
        self.buffer.label_data.len()
    }

    /// Resolve `control` ("first", "prev", "next", "last") and hand the
    /// target page to `on_page_change`. Returns the target page.
    pub fn navigate(
        &self,
        page: u32,
        page_count: u32,
        control: &str,
        on_page_change: &js_sys::Function,
    ) -> Result<u32, JsValue> {
        let control = control.parse::<NavControl>().map_err(JsError::from)?;
        let target = self.config.state(page, page_count).target(control);
        on_page_change.call1(&JsValue::NULL, &JsValue::from(target))?;
        Ok(target)
    }

    /// `[offset, limit]` of the items on `page`
    #[wasm_bindgen(js_name = itemRange)]
    pub fn item_range(&self, page: u32, total_count: Option<u32>) -> Result<Vec<u32>, JsError> {
        let range: ItemRange = self.config.item_range(page, total_count)?;
        Ok(vec![range.offset(), range.limit()])
    }
}

impl WasmPagination {
    fn with_config(config: PaginationConfig) -> Self {
        Self {
            config,
            buffer: ViewBuffer::new(),
        }
    }
}

impl Default for WasmPagination {
    fn default() -> Self {
        Self::new()
    }
}
