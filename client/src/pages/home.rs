//! Homepage route: about, publications, and service sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the browser theme controller for its lifetime. After
//! hydration it boots the controller, forwards toggle intents raised on
//! `UiState`, and republishes every snapshot. Dropping the page drops the
//! controller, which detaches the OS color-scheme listener.

use leptos::prelude::*;

use crate::components::backdrop::{AnimatedBackground, Footer};
use crate::components::hero::{ContactBar, Hero};
use crate::components::navbar::Navbar;
use crate::components::publication_card::PublicationList;
use crate::components::service_list::ServiceList;
use crate::state::ui::UiState;

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    mount_theme_controller(ui);
    #[cfg(not(feature = "hydrate"))]
    let _ = ui;

    view! {
        <div class="home-page">
            <AnimatedBackground/>
            <Navbar/>
            <main class="home-page__main">
                <Hero/>
                <ContactBar/>
                <PublicationList/>
                <ServiceList/>
                <Footer/>
            </main>
        </div>
    }
}

/// Wire the browser theme controller into `ui`.
///
/// The controller sits in an `Rc<RefCell<_>>` held only by the two effects
/// below; the OS listener keeps a `Weak`, so a change delivered after the
/// page is gone finds nothing to update.
#[cfg(feature = "hydrate")]
fn mount_theme_controller(ui: RwSignal<UiState>) {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::state::theme::ColorSchemeListener;
    use crate::util::browser_theme;

    let controller = Rc::new(RefCell::new(browser_theme::controller()));

    {
        let controller = Rc::clone(&controller);
        Effect::new(move || {
            if controller.borrow().is_initialized() {
                return;
            }

            let weak = Rc::downgrade(&controller);
            let listener: ColorSchemeListener = Box::new(move |prefers_dark| {
                let Some(shared) = weak.upgrade() else {
                    return;
                };
                let snapshot = match shared.try_borrow_mut() {
                    Ok(mut theme) => theme.on_os_preference_changed(prefers_dark),
                    Err(_) => {
                        log::warn!("color-scheme change arrived mid-transition; dropped");
                        return;
                    }
                };
                ui.update(|state| state.theme = snapshot);
            });

            let snapshot = controller.borrow_mut().initialize(listener);
            log::info!("theme mode {} ({})", snapshot.mode, snapshot.effective.as_str());
            ui.update(|state| state.theme = snapshot);
        });
    }

    // Forward navbar toggle intents. The first run only records the baseline.
    let toggle_seq = Memo::new(move |_| ui.with(|state| state.theme_toggle_seq));
    let handled = Cell::new(toggle_seq.get_untracked());
    Effect::new(move || {
        let seq = toggle_seq.get();
        if seq == handled.get() {
            return;
        }
        handled.set(seq);
        let snapshot = controller.borrow_mut().toggle_theme();
        ui.update(|state| state.theme = snapshot);
    });
}
