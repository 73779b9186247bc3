//! Full-screen zoom popup for a gallery of thumbnails.
//!
//! Every element matching the selector opens the popup on click. The popup
//! pans on drag, zooms on pinch, wheel and double-tap, and slides to the
//! neighbouring thumbnail on a horizontal swipe while unzoomed.
//!
//! All DOM callbacks hold a weak reference to the overlay state, so dropping
//! the [`Photozoom`] handle tears everything down.

use super::app::{log_error, log_exception};
use super::busy::Busy;
use super::error::{AttachError, OverlayError};
use super::events::DomEvent;
use super::sizer::fetch_aspect;
use super::surface::Attachment;
use photozoom_core::image::{sizer_url, slice_url};
use photozoom_core::{
    Fit, Gallery, GestureHandlers, Gestures, ImageFit, OverlaySettings, Size, SlideDirection,
    ZoomInput, ZoomState,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlImageElement};

/// Slide and fade duration of the popup stylesheet, in milliseconds.
const TRANSITION_MS: i32 = 500;

type Listener = Closure<dyn FnMut(web_sys::Event)>;
type Shared = Rc<RefCell<Inner>>;

/// Class list of a fresh popup.
pub fn popup_class(fixed: bool) -> &'static str {
    if fixed {
        "photozoom-popup photozoom-popup-fixed photozoom-popup-passive"
    } else {
        "photozoom-popup photozoom-popup-passive"
    }
}

/// Class list of a caption.
pub fn caption_class(description: &str) -> &'static str {
    if description.is_empty() {
        "photozoom-caption photozoom-caption-hidden"
    } else {
        "photozoom-caption"
    }
}

#[derive(Default)]
struct Hooks {
    opened: Option<js_sys::Function>,
    closed: Option<js_sys::Function>,
    located: Option<js_sys::Function>,
}

/// The image on display and its caption.
struct Slide {
    image: HtmlImageElement,
    caption: Element,
    _onload: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut()>,
}

impl Drop for Slide {
    fn drop(&mut self) {
        self.image.set_onload(None);
        self.image.set_onerror(None);
        self.image.remove();
        self.caption.remove();
    }
}

/// An open popup. Dropping it removes it from the page.
struct Popup {
    figure: HtmlElement,
    slide: Option<Slide>,
    closing: bool,
    _gadgets: Vec<Listener>,
    _gestures: Attachment,
}

impl Drop for Popup {
    fn drop(&mut self) {
        self.slide = None;
        self.figure.remove();
    }
}

struct Inner {
    document: Document,
    container: HtmlElement,
    fixed: bool,
    settings: OverlaySettings,
    elements: Vec<Element>,
    gallery: Gallery,
    busy: Busy,
    zoom: ZoomState,
    popup: Option<Popup>,
    hooks: Hooks,
}

impl Inner {
    fn element(&self) -> Option<Element> {
        self.elements.get(self.gallery.current()).cloned()
    }
}

/// Call a hook with the current thumbnail. Exceptions are logged.
fn trigger(
    name: &str,
    hook: Option<js_sys::Function>,
    element: Option<Element>,
) -> Option<JsValue> {
    let hook = hook?;
    let element = element.map_or(JsValue::NULL, JsValue::from);
    match hook.call1(&JsValue::NULL, &element) {
        Ok(value) => Some(value),
        Err(exception) => {
            log_exception(name, &exception);
            None
        }
    }
}

fn with(weak: &Weak<RefCell<Inner>>, f: impl FnOnce(&Shared)) {
    if let Some(this) = weak.upgrade() {
        f(&this);
    }
}

fn after(delay: i32, callback: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(callback);
    let scheduled = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay);
    if let Err(e) = scheduled {
        log_exception("timer", &e);
    }
}

fn listen(
    target: &EventTarget,
    event: &'static str,
    weak: &Weak<RefCell<Inner>>,
    handler: fn(&Shared, &web_sys::Event),
) -> Result<Listener, OverlayError> {
    let weak = weak.clone();
    let listener = Listener::new(move |event: web_sys::Event| {
        with(&weak, |this| handler(this, &event));
    });
    target
        .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
        .map_err(|e| AttachError::Listener {
            event,
            message: format!("{e:?}"),
        })?;
    Ok(listener)
}

fn create<T: JsCast>(document: &Document, tag: &'static str) -> Result<T, OverlayError> {
    document
        .create_element(tag)
        .map_err(|e| OverlayError::element(tag, format!("{e:?}")))?
        .dyn_into::<T>()
        .map_err(|_| OverlayError::element(tag, "unexpected element type"))
}

fn append(parent: &Element, child: &Element, tag: &'static str) -> Result<(), OverlayError> {
    parent
        .append_child(child)
        .map(drop)
        .map_err(|e| OverlayError::element(tag, format!("{e:?}")))
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log_exception(property, &e);
    }
}

fn swap_class(element: &Element, from: &str, to: &str) {
    element.set_class_name(&element.class_name().replace(from, to));
}

fn size_of(element: &HtmlElement) -> Size {
    Size::new(element.offset_width() as f32, element.offset_height() as f32)
}

/// Clickable gadget on the popup, bound to `handler` for click and touch.
fn gadget(
    document: &Document,
    figure: &HtmlElement,
    class: &str,
    label: &str,
    href: &str,
    weak: &Weak<RefCell<Inner>>,
    handler: fn(&Shared, &web_sys::Event),
) -> Result<Vec<Listener>, OverlayError> {
    let link: HtmlElement = create(document, "a")?;
    link.set_class_name(class);
    link.set_text_content(Some(label));
    if let Err(e) = link.set_attribute("href", href) {
        log_exception("href", &e);
    }
    let listeners = vec![
        listen(&link, "click", weak, handler)?,
        listen(&link, "touchstart", weak, handler)?,
    ];
    append(figure, &link, "a")?;
    Ok(listeners)
}

fn popup_handlers(weak: &Weak<RefCell<Inner>>) -> GestureHandlers<DomEvent> {
    let (drag, pinch, tap, left, right) = (
        weak.clone(),
        weak.clone(),
        weak.clone(),
        weak.clone(),
        weak.clone(),
    );
    GestureHandlers::<DomEvent>::new()
        .on_drag(move |d| with(&drag, |this| transform(this, ZoomInput::from(&d))))
        .on_pinch(move |p| with(&pinch, |this| transform(this, ZoomInput::from(&p))))
        .on_double_tap(move |_| with(&tap, toggle_zoom))
        .on_swipe_left(move |_| with(&left, |this| swiped(this, SlideDirection::Left)))
        .on_swipe_right(move |_| with(&right, |this| swiped(this, SlideDirection::Right)))
}

fn on_click(this: &Shared, index: usize, event: &web_sys::Event) {
    event.prevent_default();
    let (hook, element) = {
        let inner = this.borrow();
        (inner.hooks.opened.clone(), inner.elements.get(index).cloned())
    };
    let allowed = trigger("opened", hook, element)
        .map_or(true, |answer| answer.is_undefined() || answer.is_truthy());
    if allowed {
        if let Err(e) = show(this, index) {
            this.borrow_mut().busy.hide();
            log_error("cannot open popup", &e);
        }
    }
}

fn show(this: &Shared, index: usize) -> Result<(), OverlayError> {
    let weak = Rc::downgrade(this);
    {
        let mut guard = this.borrow_mut();
        let inner = &mut *guard;
        if inner.popup.is_some() {
            return Ok(());
        }
        inner.gallery = Gallery::new(inner.elements.len(), index);
        inner.busy.show()?;

        let figure: HtmlElement = create(&inner.document, "figure")?;
        figure.set_class_name(popup_class(inner.fixed));
        let mut gadgets = gadget(
            &inner.document,
            &figure,
            "photozoom-closer",
            "x",
            "#close",
            &weak,
            on_hide,
        )?;
        if inner.hooks.located.is_some() {
            gadgets.extend(gadget(
                &inner.document,
                &figure,
                "photozoom-locator",
                "Show on a map",
                "#map",
                &weak,
                on_locate,
            )?);
        }
        append(&inner.container, &figure, "figure")?;

        inner.zoom.reset();
        let gestures = Rc::new(RefCell::new(Gestures::new(
            inner.settings.gestures.clone(),
            popup_handlers(&weak),
        )));
        let attachment = match Attachment::attach(&figure, &gestures) {
            Ok(attachment) => attachment,
            Err(e) => {
                figure.remove();
                return Err(e.into());
            }
        };
        inner.popup = Some(Popup {
            figure,
            slide: None,
            closing: false,
            _gadgets: gadgets,
            _gestures: attachment,
        });
    }
    check_image(this, "0%");
    Ok(())
}

/// Find the image URL, description and aspect of the current thumbnail, then
/// add it to the popup.
fn check_image(this: &Shared, offset: &'static str) {
    let (element, sizer) = {
        let inner = this.borrow();
        (inner.element(), inner.settings.sizer.clone())
    };
    let Some(element) = element else {
        return;
    };
    let attribute = |name: &str| element.get_attribute(name).filter(|value| !value.is_empty());
    let Some(url) = attribute("href").or_else(|| attribute("src")) else {
        fail(this);
        return;
    };
    let description = attribute("title")
        .or_else(|| attribute("alt"))
        .or_else(|| attribute("data-desc"))
        .unwrap_or_default();

    let thumbnail = if element.tag_name().eq_ignore_ascii_case("img") {
        Some(element.clone())
    } else {
        element.get_elements_by_tag_name("img").item(0)
    };
    let aspect = thumbnail
        .and_then(|thumbnail| thumbnail.dyn_into::<HtmlElement>().ok())
        .and_then(|thumbnail| size_of(&thumbnail).aspect())
        .filter(|aspect| aspect.is_finite() && *aspect > 0.0);

    if let Some(aspect) = aspect {
        add_image(this, &url, &description, aspect, offset);
    } else if let Some(sizer) = sizer {
        let weak = Rc::downgrade(this);
        let lookup = sizer_url(&sizer, &url);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_aspect(&lookup).await;
            with(&weak, |this| match result {
                Ok(aspect) => add_image(this, &url, &description, aspect, offset),
                Err(e) => {
                    log_error("size lookup", &e);
                    fail(this);
                }
            });
        });
    }
}

fn add_image(this: &Shared, url: &str, description: &str, aspect: f32, offset: &str) {
    let weak = Rc::downgrade(this);
    let mut guard = this.borrow_mut();
    let inner = &mut *guard;
    let Some(popup) = inner.popup.as_mut() else {
        return;
    };
    let slide = build_slide(
        &inner.document,
        &popup.figure,
        &inner.settings,
        &weak,
        url,
        description,
        aspect,
        offset,
    );
    match slide {
        Ok(slide) => popup.slide = Some(slide),
        Err(e) => {
            drop(guard);
            log_error("cannot add image", &e);
            fail(this);
        }
    }
}

fn build_slide(
    document: &Document,
    figure: &HtmlElement,
    settings: &OverlaySettings,
    weak: &Weak<RefCell<Inner>>,
    url: &str,
    description: &str,
    aspect: f32,
    offset: &str,
) -> Result<Slide, OverlayError> {
    let caption: Element = create(document, "figcaption")?;
    caption.set_class_name(caption_class(description));
    caption.set_text_content(Some(description));

    let image: HtmlImageElement = create(document, "img")?;
    image.set_class_name("photozoom-image");
    image.set_alt(description);
    set_style(&image, "visibility", "hidden");
    set_style(&image, "left", offset);

    let fit = ImageFit::choose(aspect, size_of(figure), settings.zoom);
    let (width, height) = fit.attributes();
    for (name, value) in [("width", width), ("height", height)] {
        let result = match value {
            Some(value) => image.set_attribute(name, value),
            None => image.remove_attribute(name),
        };
        if let Err(e) = result {
            log_exception(name, &e);
        }
    }

    let revealed = weak.clone();
    let onload = Closure::<dyn FnMut()>::new(move || with(&revealed, reveal));
    let failed = weak.clone();
    let onerror = Closure::<dyn FnMut()>::new(move || with(&failed, fail));
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));

    append(figure, &image, "img")?;
    append(figure, &caption, "figcaption")?;
    image.set_src(&slice_url(&settings.slicer, url, fit));

    Ok(Slide {
        image,
        caption,
        _onload: onload,
        _onerror: onerror,
    })
}

fn reveal(this: &Shared) {
    let mut guard = this.borrow_mut();
    let inner = &mut *guard;
    let Some(popup) = inner.popup.as_ref() else {
        return;
    };
    let Some(slide) = popup.slide.as_ref() else {
        return;
    };
    inner.busy.hide();
    let gap = popup.figure.offset_height() - slide.image.offset_height();
    let margin = (gap as f32 / 2.0).round();
    set_style(&slide.image, "margin-top", &format!("{margin}px"));
    set_style(&slide.image, "visibility", "visible");
    set_style(&slide.image, "left", "0%");
    swap_class(&popup.figure, "-passive", "-active");
}

/// Give up on the popup after the image or its size could not be loaded.
fn fail(this: &Shared) {
    let (hook, element) = {
        let mut inner = this.borrow_mut();
        inner.popup = None;
        inner.busy.hide();
        (inner.hooks.located.clone(), inner.element())
    };
    trigger("located", hook, element);
}

fn transform(this: &Shared, input: ZoomInput) {
    let mut guard = this.borrow_mut();
    let inner = &mut *guard;
    let Some(popup) = inner.popup.as_ref() else {
        return;
    };
    let Some(slide) = popup.slide.as_ref() else {
        return;
    };
    let fit = Fit {
        image: size_of(&slide.image),
        popup: size_of(&popup.figure),
    };
    inner.zoom.apply(input, fit);
    set_style(&slide.image, "transform", &inner.zoom.transform());
}

fn toggle_zoom(this: &Shared) {
    let delta = this.borrow().zoom.toggle_delta();
    transform(this, ZoomInput::scale(delta));
}

fn swiped(this: &Shared, direction: SlideDirection) {
    if !this.borrow().zoom.is_unzoomed() {
        return;
    }
    {
        let inner = this.borrow();
        if !inner.gallery.can_slide() {
            return;
        }
        let Some(slide) = inner
            .popup
            .as_ref()
            .filter(|popup| !popup.closing)
            .and_then(|popup| popup.slide.as_ref())
        else {
            return;
        };
        set_style(&slide.image, "left", direction.outgoing());
    }
    let weak = Rc::downgrade(this);
    after(TRANSITION_MS, move || {
        with(&weak, |this| slid(this, direction));
    });
}

fn slid(this: &Shared, direction: SlideDirection) {
    let (hook, element) = {
        let mut guard = this.borrow_mut();
        let inner = &mut *guard;
        let Some(popup) = inner.popup.as_mut().filter(|popup| !popup.closing) else {
            return;
        };
        popup.slide = None;
        if let Err(e) = inner.busy.show() {
            log_error("busy", &e);
        }
        inner.gallery.slide(direction);
        (inner.hooks.opened.clone(), inner.element())
    };
    check_image(this, direction.incoming());
    trigger("opened", hook, element);
}

fn on_hide(this: &Shared, event: &web_sys::Event) {
    event.prevent_default();
    close(this);
}

fn on_locate(this: &Shared, event: &web_sys::Event) {
    event.prevent_default();
    let (hook, element) = {
        let inner = this.borrow();
        (inner.hooks.located.clone(), inner.element())
    };
    trigger("located", hook, element);
}

fn close(this: &Shared) {
    let (hook, element) = {
        let mut inner = this.borrow_mut();
        inner.busy.hide();
        if let Some(popup) = inner.popup.as_mut().filter(|popup| !popup.closing) {
            popup.closing = true;
            swap_class(&popup.figure, "-active", "-passive");
            let weak = Rc::downgrade(this);
            after(TRANSITION_MS, move || with(&weak, remove_closing));
        }
        (inner.hooks.closed.clone(), inner.element())
    };
    trigger("closed", hook, element);
}

/// Drop a popup whose close transition has finished.
fn remove_closing(this: &Shared) {
    let mut inner = this.borrow_mut();
    if inner.popup.as_ref().is_some_and(|popup| popup.closing) {
        inner.popup = None;
        inner.busy.hide();
    }
}

/// Zoom popup bound to every element matching a selector.
///
/// ```javascript
/// const zoom = new Photozoom('.gallery a', '{"zoom": 2, "slicer": "/img?src={src}&{size}"}');
/// zoom.on_opened((element) => true);
/// zoom.on_located((element) => showMap(element));
/// ```
#[wasm_bindgen]
pub struct Photozoom {
    inner: Shared,
    clicks: Vec<(Element, Listener)>,
}

#[wasm_bindgen]
impl Photozoom {
    /// Bind the popup to `selector`. `settings_json` may be empty for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str, settings_json: &str) -> Result<Photozoom, JsValue> {
        Self::bind(selector, settings_json).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Hook called with the thumbnail before the popup opens and after each
    /// slide. Returning a falsy value other than `undefined` keeps it closed.
    pub fn on_opened(&self, callback: js_sys::Function) {
        self.inner.borrow_mut().hooks.opened = Some(callback);
    }

    /// Hook called with the thumbnail when the popup is closed.
    pub fn on_closed(&self, callback: js_sys::Function) {
        self.inner.borrow_mut().hooks.closed = Some(callback);
    }

    /// Hook called by the locator gadget, and when an image cannot be shown.
    pub fn on_located(&self, callback: js_sys::Function) {
        self.inner.borrow_mut().hooks.located = Some(callback);
    }

    /// Number of bound thumbnails.
    pub fn len(&self) -> usize {
        self.inner.borrow().elements.len()
    }

    /// Whether no thumbnail matched.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().elements.is_empty()
    }

    /// Whether a popup is on the page.
    pub fn is_open(&self) -> bool {
        self.inner.borrow().popup.is_some()
    }

    /// Open the popup on the thumbnail at `index`.
    pub fn open(&self, index: usize) -> Result<(), JsValue> {
        if index >= self.len() {
            return Err(JsValue::from_str("Thumbnail index out of range"));
        }
        show(&self.inner, index).map_err(|e| {
            self.inner.borrow_mut().busy.hide();
            JsValue::from_str(&e.to_string())
        })
    }

    /// Close the popup as the closer gadget does.
    pub fn close(&self) {
        close(&self.inner);
    }
}

impl Photozoom {
    fn bind(selector: &str, settings_json: &str) -> Result<Self, OverlayError> {
        let document = web_sys::window()
            .ok_or(AttachError::NoWindow)?
            .document()
            .ok_or(AttachError::NoDocument)?;
        let settings = if settings_json.trim().is_empty() {
            OverlaySettings::default()
        } else {
            OverlaySettings::from_json(settings_json).map_err(AttachError::from)?
        }
        .normalized();

        let body = document.body().ok_or(AttachError::NoBody)?;
        let container = match &settings.container {
            None => body.clone(),
            Some(container) => document
                .query_selector(container)
                .map_err(|e| OverlayError::selector(container.as_str(), format!("{e:?}")))?
                .ok_or_else(|| OverlayError::selector(container.as_str(), "no match"))?
                .dyn_into::<HtmlElement>()
                .map_err(|_| OverlayError::selector(container.as_str(), "not an HTML element"))?,
        };
        let fixed = container.is_same_node(Some(&body));

        let matches = document
            .query_selector_all(selector)
            .map_err(|e| OverlayError::selector(selector, format!("{e:?}")))?;
        let elements: Vec<Element> = (0..matches.length())
            .filter_map(|i| matches.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();

        let inner = Rc::new(RefCell::new(Inner {
            busy: Busy::new(document.clone(), container.clone(), fixed),
            document,
            container,
            fixed,
            gallery: Gallery::new(elements.len(), 0),
            zoom: ZoomState::new(settings.zoom),
            settings,
            elements: elements.clone(),
            popup: None,
            hooks: Hooks::default(),
        }));

        let weak = Rc::downgrade(&inner);
        let mut clicks = Vec::with_capacity(elements.len());
        for (index, element) in elements.into_iter().enumerate() {
            let weak = weak.clone();
            let listener = Listener::new(move |event: web_sys::Event| {
                with(&weak, |this| on_click(this, index, &event));
            });
            element
                .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                .map_err(|e| AttachError::Listener {
                    event: "click",
                    message: format!("{e:?}"),
                })?;
            clicks.push((element, listener));
        }
        Ok(Self { inner, clicks })
    }
}

impl Drop for Photozoom {
    fn drop(&mut self) {
        for (element, listener) in self.clicks.drain(..) {
            let _ = element
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
        }
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn gallery(count: usize) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let list = document.create_element("div").unwrap();
        list.set_class_name("photozoom-test");
        for i in 0..count {
            let link = document.create_element("a").unwrap();
            link.set_attribute("href", &format!("/photo-{i}.jpg")).unwrap();
            link.set_attribute("title", &format!("Photo {i}")).unwrap();
            list.append_child(&link).unwrap();
        }
        document.body().unwrap().append_child(&list).unwrap();
        list
    }

    #[wasm_bindgen_test]
    fn test_class_lists() {
        assert!(popup_class(true).contains("photozoom-popup-fixed"));
        assert!(popup_class(false).ends_with("photozoom-popup-passive"));
        assert!(caption_class("").contains("-hidden"));
        assert_eq!(caption_class("Harbour"), "photozoom-caption");
    }

    #[wasm_bindgen_test]
    fn test_binds_every_match() {
        let list = gallery(3);
        let zoom = Photozoom::new(".photozoom-test a", "").unwrap();
        assert_eq!(zoom.len(), 3);
        assert!(!zoom.is_open());
        list.remove();
    }

    #[wasm_bindgen_test]
    fn test_rejects_bad_settings() {
        assert!(Photozoom::new("a", "{\"zoom\": \"big\"}").is_err());
        assert!(Photozoom::new("a", "{\"container\": \"#missing-container\"}").is_err());
    }

    #[wasm_bindgen_test]
    fn test_open_and_close() {
        let list = gallery(2);
        let zoom = Photozoom::new(".photozoom-test a", "").unwrap();
        zoom.open(0).unwrap();
        assert!(zoom.is_open());
        let document = web_sys::window().unwrap().document().unwrap();
        let popups = document.get_elements_by_class_name("photozoom-popup");
        assert_eq!(popups.length(), 1);
        let closers = document.get_elements_by_class_name("photozoom-closer");
        assert_eq!(closers.length(), 1);
        assert_eq!(document.get_elements_by_class_name("photozoom-locator").length(), 0);
        zoom.close();
        let popup = popups.item(0).unwrap();
        assert!(popup.class_name().contains("-passive"));
        drop(zoom);
        assert_eq!(document.get_elements_by_class_name("photozoom-popup").length(), 0);
        list.remove();
    }

    #[wasm_bindgen_test]
    fn test_slide_finishing_after_close_is_dropped() {
        let list = gallery(2);
        let zoom = Photozoom::new(".photozoom-test a", "").unwrap();
        zoom.open(0).unwrap();
        zoom.close();
        assert!(!zoom.inner.borrow().busy.is_shown());

        slid(&zoom.inner, SlideDirection::Left);
        assert!(!zoom.inner.borrow().busy.is_shown());
        assert_eq!(zoom.inner.borrow().gallery.current(), 0);

        remove_closing(&zoom.inner);
        assert!(!zoom.is_open());
        list.remove();
    }

    #[wasm_bindgen_test]
    fn test_removal_hides_spinner() {
        let list = gallery(2);
        let zoom = Photozoom::new(".photozoom-test a", "").unwrap();
        zoom.open(1).unwrap();
        zoom.close();
        zoom.inner.borrow_mut().busy.show().unwrap();

        remove_closing(&zoom.inner);
        assert!(!zoom.is_open());
        assert!(!zoom.inner.borrow().busy.is_shown());
        let document = web_sys::window().unwrap().document().unwrap();
        assert_eq!(document.get_elements_by_class_name("photozoom-busy").length(), 0);
        list.remove();
    }

    #[wasm_bindgen_test]
    fn test_removal_spares_a_reopened_popup() {
        let list = gallery(2);
        let zoom = Photozoom::new(".photozoom-test a", "").unwrap();
        zoom.open(0).unwrap();
        remove_closing(&zoom.inner);
        assert!(zoom.is_open());
        list.remove();
    }

    #[wasm_bindgen_test]
    fn test_closed_hook_may_use_the_overlay() {
        let list = gallery(2);
        let zoom = Rc::new(Photozoom::new(".photozoom-test a", "").unwrap());
        let seen = Rc::new(std::cell::Cell::new(None));
        let (handle, record) = (Rc::downgrade(&zoom), seen.clone());
        let hook = Closure::<dyn Fn(JsValue)>::new(move |_element: JsValue| {
            if let Some(zoom) = handle.upgrade() {
                record.set(Some(zoom.is_open()));
            }
        });
        zoom.on_closed(hook.as_ref().unchecked_ref::<js_sys::Function>().clone());
        zoom.open(0).unwrap();
        zoom.close();
        assert_eq!(seen.get(), Some(true));
        list.remove();
    }

    #[wasm_bindgen_test]
    fn test_open_out_of_range() {
        let list = gallery(1);
        let zoom = Photozoom::new(".photozoom-test a", "").unwrap();
        assert!(zoom.open(5).is_err());
        list.remove();
    }
}
