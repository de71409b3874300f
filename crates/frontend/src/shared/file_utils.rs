//! Reading `<input type="file">` selections.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

/// Files selected in the input that fired `ev`
pub fn selected_files(ev: &web_sys::Event) -> Vec<File> {
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Clears the input so the same file can be picked again
pub fn reset_input(ev: &web_sys::Event) {
    if let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    {
        input.set_value("");
    }
}

/// Whole file as UTF-8 text via `Blob.text()`
pub async fn read_text(file: &File) -> Result<String, String> {
    let value = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    value
        .as_string()
        .ok_or_else(|| "Failed to read file: not text".to_string())
}

/// Human-readable size, e.g. "1.5 MB"
pub fn format_size(bytes: f64) -> String {
    const KB: f64 = 1024.0;
    if bytes < KB {
        format!("{} B", bytes as u64)
    } else if bytes < KB * KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{:.1} MB", bytes / (KB * KB))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512.0), "512 B");
        assert_eq!(format_size(2048.0), "2.0 KB");
        assert_eq!(format_size(5.0 * 1024.0 * 1024.0), "5.0 MB");
    }
}
