use contracts::domain::a003_product::form::{is_acceptable_image, MAX_IMAGES};
use contracts::domain::a003_product::ProductForm;
use leptos::prelude::*;
use web_sys::{File, FormData, Url};

use crate::domain::a003_product::api;
use crate::domain::a003_product::ui::form_fields::FormLookups;
use crate::system::session::SessionContext;

pub const CREATED_REDIRECT_MS: u32 = 2000;

/// Picked image with its object-URL preview
#[derive(Clone)]
pub struct PickedImage {
    pub file: File,
    pub preview: String,
}

impl PickedImage {
    fn from_file(file: File) -> Self {
        let preview = Url::create_object_url_with_blob(&file).unwrap_or_default();
        Self { file, preview }
    }

    fn release(&self) {
        if !self.preview.is_empty() {
            let _ = Url::revoke_object_url(&self.preview);
        }
    }
}

/// Checks a new pick against the type/size rules and the image cap.
/// The whole pick is refused on any problem.
pub fn check_pick(existing: usize, picked: &[(String, u64)]) -> Result<(), &'static str> {
    if picked.iter().any(|(name, size)| !is_acceptable_image(name, *size)) {
        return Err("Some files were rejected. Please check file type and size limits.");
    }
    if existing + picked.len() > MAX_IMAGES {
        return Err("Maximum 20 images allowed");
    }
    Ok(())
}

#[derive(Clone, Copy)]
pub struct ProductCreateViewModel {
    pub form: RwSignal<ProductForm>,
    pub images: RwSignal<Vec<PickedImage>, LocalStorage>,
    pub lookups: FormLookups,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
}

impl ProductCreateViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductForm::default()),
            images: RwSignal::new_local(Vec::new()),
            lookups: FormLookups::new(),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
        }
    }

    pub fn add_images(&self, files: Vec<File>) {
        let picked: Vec<(String, u64)> = files
            .iter()
            .map(|f| (f.name(), f.size().max(0.0) as u64))
            .collect();
        let existing = self.images.with_untracked(Vec::len);
        if let Err(message) = check_pick(existing, &picked) {
            self.error.set(Some(message.to_string()));
            return;
        }
        self.images
            .update(|images| images.extend(files.into_iter().map(PickedImage::from_file)));
    }

    pub fn remove_image(&self, index: usize) {
        self.images.update(|images| {
            if index < images.len() {
                images.remove(index).release();
            }
        });
    }

    fn build_form_data(&self) -> Result<FormData, String> {
        let image_count = self.images.with_untracked(Vec::len);
        let fields = self.form.with_untracked(|f| {
            f.validate(Some(image_count))?;
            f.multipart_fields()
        });
        let fields = fields.map_err(|e| e.to_string())?;

        let data = FormData::new().map_err(|e| format!("Failed to build form data: {:?}", e))?;
        for (name, value) in fields {
            data.append_with_str(name, &value)
                .map_err(|e| format!("Failed to build form data: {:?}", e))?;
        }
        self.images.with_untracked(|images| {
            images.iter().try_for_each(|img| {
                data.append_with_blob("productImages", &img.file)
                    .map_err(|e| format!("Failed to attach image: {:?}", e))
            })
        })?;
        Ok(data)
    }

    fn reset(&self) {
        self.form.set(ProductForm::default());
        self.images.update(|images| {
            images.iter().for_each(PickedImage::release);
            images.clear();
        });
    }

    pub fn submit(&self, session: SessionContext, on_created: Callback<()>) {
        self.error.set(None);
        self.success.set(None);
        let data = match self.build_form_data() {
            Ok(data) => data,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        let this = *self;
        this.saving.set(true);
        let client = session.client();
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_product(&client, data).await {
                Ok(response) => {
                    log::info!(
                        "Created product {}",
                        response.product.as_ref().map(|p| p.id.as_str()).unwrap_or("?")
                    );
                    this.saving.set(false);
                    this.success.set(Some("Product created successfully!".to_string()));
                    this.reset();
                    gloo_timers::future::TimeoutFuture::new(CREATED_REDIRECT_MS).await;
                    on_created.run(());
                }
                Err(e) => {
                    log::error!("Error creating product: {}", e);
                    this.saving.set(false);
                    this.error.set(Some(e));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(names: &[&str]) -> Vec<(String, u64)> {
        names.iter().map(|n| (n.to_string(), 1024)).collect()
    }

    #[test]
    fn test_check_pick_rejects_wrong_type() {
        assert_eq!(
            check_pick(0, &pick(&["a.jpg", "notes.pdf"])),
            Err("Some files were rejected. Please check file type and size limits.")
        );
    }

    #[test]
    fn test_check_pick_rejects_oversized() {
        let picked = vec![("big.png".to_string(), 6 * 1024 * 1024)];
        assert!(check_pick(0, &picked).is_err());
    }

    #[test]
    fn test_check_pick_caps_total() {
        assert!(check_pick(18, &pick(&["a.jpg", "b.webp"])).is_ok());
        assert_eq!(check_pick(19, &pick(&["a.jpg", "b.png"])), Err("Maximum 20 images allowed"));
    }
}
