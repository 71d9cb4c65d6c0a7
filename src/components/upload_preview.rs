//! File input with asynchronous preview cards.
//!
//! Each selected file is read as a data URL by its own task; a card is
//! appended when its read finishes, so card order follows read speed rather
//! than selection order. Re-selecting files clears the list and starts
//! over; reads from the superseded selection are not cancelled and simply
//! append when they land.

#[cfg(test)]
#[path = "upload_preview_test.rs"]
mod upload_preview_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use uuid::Uuid;

use crate::util::file_size::format_file_size;

/// What a finished read renders as.
#[derive(Clone, Debug, PartialEq)]
pub enum PreviewShape {
    /// Inline thumbnail backed by a data URL.
    Image { data_url: String },
    /// Generic file icon for everything else.
    Icon,
}

/// One rendered preview card.
#[derive(Clone, Debug, PartialEq)]
pub struct FilePreview {
    pub id: Uuid,
    pub name: String,
    pub size_label: String,
    pub shape: PreviewShape,
}

impl FilePreview {
    /// Build a card from file metadata and a finished data-URL read.
    #[must_use]
    pub fn from_read(name: String, size_bytes: u64, mime: &str, data_url: String) -> Self {
        let shape = if mime.starts_with("image/") {
            PreviewShape::Image { data_url }
        } else {
            PreviewShape::Icon
        };
        Self {
            id: Uuid::new_v4(),
            name,
            size_label: format_file_size(size_bytes),
            shape,
        }
    }
}

/// Multi-file input rendering a preview card per selected file.
#[component]
pub fn UploadPreview(
    /// `id` and `name` for the wrapped input element.
    input_id: &'static str,
) -> impl IntoView {
    let previews = RwSignal::new(Vec::<FilePreview>::new());

    let on_change = move |ev: leptos::ev::Event| {
        // Prior previews clear immediately; cards for the new selection
        // stream in as their reads complete.
        previews.set(Vec::new());
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(files) = input.files() else {
                return;
            };
            for index in 0..files.length() {
                let Some(file) = files.get(index) else {
                    continue;
                };
                let name = file.name();
                let mime = file.type_();
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let size_bytes = file.size() as u64;
                leptos::task::spawn_local(async move {
                    let blob = gloo_file::File::from(file);
                    match gloo_file::futures::read_as_data_url(&blob).await {
                        Ok(data_url) => previews.update(|cards| {
                            cards.push(FilePreview::from_read(name, size_bytes, &mime, data_url));
                        }),
                        Err(err) => log::warn!("file preview read failed: {err}"),
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class="upload-field">
            <input id=input_id name=input_id type="file" multiple on:change=on_change/>
            <div class="file-preview">
                {move || previews.get().iter().map(preview_card).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

fn preview_card(card: &FilePreview) -> impl IntoView + use<> {
    let body = match &card.shape {
        PreviewShape::Image { data_url } => {
            view! { <img src=data_url.clone() alt=card.name.clone()/> }.into_any()
        }
        PreviewShape::Icon => view! {
            <div class="file-icon">
                <i class="fas fa-file"></i>
            </div>
        }
        .into_any(),
    };
    view! {
        <div class="file-preview-item">
            {body}
            <div class="file-preview-info">
                <span class="file-name">{card.name.clone()}</span>
                <span class="file-size">{card.size_label.clone()}</span>
            </div>
        </div>
    }
}
