use contracts::usecases::u501_import_excel::ImportExcelResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use super::api;
use super::validation::validate_import_file;
use crate::system::auth::use_session;

/// Spreadsheet import page
///
/// `on_success` runs after the server accepted the file (the catalog is
/// refreshed there).
#[component]
pub fn ImportExcelPage(#[prop(into)] on_success: Callback<()>) -> impl IntoView {
    let session = StoredValue::new(use_session());
    // web_sys::File is not Send+Sync, store locally
    let selected_file = StoredValue::new_local(None::<File>);
    let (file_name, set_file_name) = signal(None::<String>);
    let (is_uploading, set_is_uploading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (result, set_result) = signal(None::<ImportExcelResponse>);

    let on_file_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        set_result.set(None);

        let file = input.files().and_then(|files| files.get(0));
        let Some(file) = file else {
            selected_file.set_value(None);
            set_file_name.set(None);
            return;
        };

        match validate_import_file(&file.name(), &file.type_(), file.size() as u64) {
            Ok(()) => {
                set_error.set(None);
                set_file_name.set(Some(file.name()));
                selected_file.set_value(Some(file));
            }
            Err(err) => {
                set_error.set(Some(err.to_string()));
                set_file_name.set(None);
                selected_file.set_value(None);
                input.set_value("");
            }
        }
    };

    let on_upload = move |_| {
        let Some(file) = selected_file.get_value() else {
            set_error.set(Some("Please select a file first".to_string()));
            return;
        };

        set_is_uploading.set(true);
        set_error.set(None);
        set_result.set(None);

        spawn_local(async move {
            let session = session.get_value();
            match api::upload_excel(&session, file).await {
                Ok(response) => {
                    log::info!(
                        "Import finished: {} products, {} days",
                        response.products_count,
                        response.days_count
                    );
                    selected_file.set_value(None);
                    set_file_name.set(None);
                    set_result.set(Some(response));
                    on_success.run(());
                }
                Err(err) => {
                    set_error.set(Some(format!("Upload failed: {}", err)));
                }
            }
            set_is_uploading.set(false);
        });
    };

    view! {
        <div class="u501-import">
            <h2>"Excel data import"</h2>
            <p>"Batch import of product inventory, procurement and sales data (.xlsx / .xls, up to 10MB)."</p>

            <div class="u501-import__filebar">
                <input
                    type="file"
                    id="u501-file-input"
                    accept=".xlsx,.xls"
                    on:change=on_file_change
                    disabled=move || is_uploading.get()
                />
                <span class="u501-import__filename">
                    {move || file_name.get().unwrap_or_else(|| "No file selected".to_string())}
                </span>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_upload
                    disabled=Signal::derive(move || is_uploading.get() || file_name.get().is_none())
                >
                    {move || if is_uploading.get() { "Uploading..." } else { "Upload" }}
                </Button>
            </div>

            {move || {
                error
                    .get()
                    .map(|err| view! { <div class="error-message">{err}</div> })
            }}

            {move || {
                result
                    .get()
                    .map(|response| {
                        view! {
                            <div class="u501-import__result">
                                <strong>"Import completed"</strong>
                                <p>{response.message}</p>
                                <p>{format!("Products: {}", response.products_count)}</p>
                                <p>{format!("Day records: {}", response.days_count)}</p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
