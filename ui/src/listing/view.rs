use std::rc::Rc;

use api::{ApiConfig, ApiError, HttpTransport, ListingTransport};
use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;

use crate::components::toast::{self, ToastKind, ToastQueue};
use crate::core::storage;
use crate::t;

use super::draft::{Category, ImageFile, ImageSlot, VALIDATION_MESSAGE};
use super::form::{PostFormState, SubmitOutcome, SubmitRejected};
use super::previews;

type SharedTransport = Rc<Result<HttpTransport, ApiError>>;

#[component]
pub fn PostForm() -> Element {
    let mut form = use_signal(PostFormState::default);
    let toasts = try_use_context::<Signal<ToastQueue>>();
    let transport: SharedTransport = use_hook(|| Rc::new(HttpTransport::new(ApiConfig::from_env())));

    // Leaving the page discards the draft; free its blob previews with it.
    use_drop(move || {
        if let Ok(mut state) = form.try_write() {
            for uri in state.discard() {
                previews::release(&uri);
            }
        }
    });

    let (category, description, price, slots, message, message_class, submit_style, submitting, has_images) = {
        let state = form.read();
        let slots: Vec<(ImageSlot, Option<String>)> = ImageSlot::ALL
            .iter()
            .map(|slot| (*slot, state.previews.get(*slot).map(str::to_string)))
            .collect();
        (
            state.draft.category.map(Category::as_str).unwrap_or_default(),
            state.draft.description.clone(),
            state.draft.price.clone(),
            slots,
            state.message.clone(),
            state.message_class(),
            state.submit_style(),
            state.is_submitting(),
            state.draft.has_images(),
        )
    };

    let lang = crate::i18n::use_lang_code();
    let upload_hint = t!("post-upload-hint");
    let image_label = t!("post-image-label");

    rsx! {
        div { class: "post-form", lang: "{lang}",
            form {
                class: "post-form__fields",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit(form, toasts, transport.clone());
                },

                div { class: "post-form__field",
                    label { r#for: "type", class: "post-form__label", {t!("post-type-label")} }
                    select {
                        id: "type",
                        name: "type",
                        class: "post-form__input",
                        value: "{category}",
                        onchange: move |evt: FormEvent| form.with_mut(|f| f.set_category(&evt.value())),
                        option { value: "", disabled: true, {t!("post-type-placeholder")} }
                        for option_category in Category::ALL {
                            option {
                                key: "{option_category.as_str()}",
                                value: option_category.as_str(),
                                {category_label(option_category)}
                            }
                        }
                    }
                }

                div { class: "post-form__field",
                    label { r#for: "description", class: "post-form__label", {t!("post-description-label")} }
                    textarea {
                        id: "description",
                        name: "description",
                        class: "post-form__input",
                        rows: 4,
                        value: "{description}",
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.set_description(evt.value())),
                    }
                }

                div { class: "post-form__field",
                    label { r#for: "price", class: "post-form__label", {t!("post-price-label")} }
                    input {
                        r#type: "number",
                        id: "price",
                        name: "price",
                        class: "post-form__input",
                        value: "{price}",
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.set_price(evt.value())),
                    }
                }

                div { class: "post-form__slots",
                    for (slot, preview) in slots {
                        div { key: "{slot.field_name()}", class: "post-form__slot",
                            label { r#for: slot.field_name(), class: "post-form__label",
                                "{image_label} {slot.number()}"
                            }
                            input {
                                r#type: "file",
                                id: slot.field_name(),
                                name: slot.field_name(),
                                accept: "image/*",
                                class: "visually-hidden",
                                onchange: move |evt: FormEvent| attach_selected(form, slot, evt),
                            }
                            label { r#for: slot.field_name(), class: "post-form__dropzone",
                                if let Some(uri) = preview {
                                    img {
                                        class: "post-form__preview",
                                        src: "{uri}",
                                        alt: t!("post-preview-alt", number = slot.number()),
                                    }
                                } else {
                                    span { class: "post-form__upload-hint", "{upload_hint}" }
                                }
                            }
                        }
                    }
                }

                if !has_images {
                    p { class: "post-form__hint", {t!("post-images-missing-hint")} }
                }

                button {
                    r#type: "submit",
                    class: "button post-form__submit {submit_style}",
                    disabled: submitting,
                    if submitting {
                        {t!("post-submitting")}
                    } else {
                        {t!("post-submit")}
                    }
                }
            }

            if let Some(text) = message {
                p { class: "{message_class}", "{text}" }
            }
        }
    }
}

fn category_label(category: Category) -> String {
    match category {
        Category::Room => t!("post-type-room"),
        Category::Apartment => t!("post-type-apartment"),
        Category::House => t!("post-type-house"),
    }
}

async fn attach_selected(mut form: Signal<PostFormState>, slot: ImageSlot, evt: FormEvent) {
    let Some(engine) = evt.files() else {
        return;
    };
    let Some(name) = engine.files().into_iter().next() else {
        return;
    };
    let Some(bytes) = engine.read_file(&name).await else {
        warn!(file = %name, "could not read selected image");
        return;
    };

    let file = ImageFile::new(&name, bytes);
    debug!(slot = slot.number(), file = %file.file_name, mime = %file.mime, "image attached");
    let preview = previews::preview_uri(&file);
    if let Some(replaced) = form.with_mut(|f| f.attach_image(slot, file, preview)) {
        previews::release(&replaced);
    }
}

fn submit(
    mut form: Signal<PostFormState>,
    toasts: Option<Signal<ToastQueue>>,
    transport: SharedTransport,
) {
    let payload = match form.with_mut(PostFormState::begin_submit) {
        Ok(payload) => payload,
        Err(SubmitRejected::InFlight) => {
            debug!("submit ignored: a listing is already being posted");
            return;
        }
        Err(SubmitRejected::Invalid(err)) => {
            warn!(reason = %err, "listing failed validation");
            toast::notify(toasts, ToastKind::Error, VALIDATION_MESSAGE);
            return;
        }
    };

    spawn(async move {
        let image_count = payload.images().len();
        let token = storage::load_token();
        if token.is_none() {
            warn!("no session token stored; posting without credentials");
        }

        let result = match transport.as_ref() {
            Ok(client) => client.create_post(payload, token).await,
            Err(err) => Err(err.clone()),
        };

        let outcome = form.with_mut(|f| f.finish(result));
        match &outcome {
            SubmitOutcome::Posted { released_previews } => {
                info!(image_count, "listing posted");
                for uri in released_previews {
                    previews::release(uri);
                }
                toast::notify(toasts, ToastKind::Success, outcome.message());
            }
            SubmitOutcome::Failed { message } => {
                warn!(%message, "listing submission failed");
                toast::notify(toasts, ToastKind::Error, message.as_str());
            }
        }
    });
}
