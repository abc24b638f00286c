use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::ProductSeriesDashboard;
use crate::domain::a001_product::api as product_api;
use crate::domain::a001_product::ProductCatalog;
use crate::layout::{Navigation, Page};
use crate::system::auth::{use_auth, use_session, AuthProvider, Session};
use crate::system::pages::LoginPage;
use crate::usecases::u501_import_excel::ImportExcelPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <Shell />
        </AuthProvider>
    }
}

/// Login page, or the main layout once a user is known
#[component]
fn Shell() -> impl IntoView {
    let auth_state = use_auth();

    move || {
        let state = auth_state.get();
        if state.restoring {
            view! {
                <div class="app-loading">
                    <p>"Loading..."</p>
                </div>
            }
            .into_any()
        } else if state.is_authenticated() {
            view! { <MainLayout /> }.into_any()
        } else {
            view! { <LoginPage /> }.into_any()
        }
    }
}

/// Replace the catalog with the server's current product list
async fn refresh_catalog(session: &Session, catalog: RwSignal<ProductCatalog>) {
    match product_api::list_products(session).await {
        Ok(products) => {
            catalog.try_update(|c| c.replace(products));
        }
        Err(err) => log::error!("Failed to load products: {}", err),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let session = StoredValue::new(use_session());
    let catalog = RwSignal::new(ProductCatalog::default());
    let page = RwSignal::new(Page::default());

    let refresh = move || {
        let session = session.get_value();
        spawn_local(async move {
            refresh_catalog(&session, catalog).await;
        });
    };

    // Catalog is loaded on login / session restore
    refresh();
    let on_import_success = Callback::new(move |_: ()| refresh());

    view! {
        <div class="app-shell">
            <Navigation page=page />
            <main class="app-main">
                {move || match page.get() {
                    Page::Dashboard => view! { <ProductSeriesDashboard catalog=catalog /> }.into_any(),
                    Page::Import => view! { <ImportExcelPage on_success=on_import_success /> }.into_any(),
                }}
            </main>
        </div>
    }
}
