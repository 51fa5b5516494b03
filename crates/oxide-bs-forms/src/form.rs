//! The form builder and the one-field builder it hands out.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::attributes::AttributeSet;
use crate::config::{FormConfig, HorizontalLayout};
use crate::error::{FormError, Result};
use crate::fields::{FieldKind, FieldState, Label, SelectOptions};
use crate::services::{
    CsrfProvider, ErrorStore, MethodOverride, OldInput, Services, Translator, UrlResolver,
};
use crate::widgets;

/// Settings that last from the opening tag until [`FormBuilder::close`].
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// Lower-cased HTTP method.
    pub method: String,
    pub multipart: bool,
    /// Inline layout: no wrapper divs, screen-reader-only labels.
    pub inline: bool,
    pub horizontal: Option<HorizontalLayout>,
    /// Translation namespace for labels, legends and button captions.
    pub locale: Option<String>,
    pub id_prefix: String,
    /// Values of the bound record, keyed by field name.
    pub data: Option<Map<String, Value>>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            method: "post".to_string(),
            multipart: false,
            inline: false,
            horizontal: None,
            locale: None,
            id_prefix: String::new(),
            data: None,
        }
    }
}

/// Builds Bootstrap 4 form markup one control at a time.
///
/// Form-level settings live on the builder. Each control is configured on
/// a [`Field`] obtained from one of the entry points and turned into markup
/// by [`Field::render`], which consumes it:
///
/// ```
/// use oxide_bs_forms::FormBuilder;
///
/// let mut form = FormBuilder::new();
/// form.put().id_prefix("user-");
///
/// let mut html = form.open().url("/users/1").render().unwrap();
/// html += &form.text("name", "Name").value("Ada").render().unwrap();
/// html += &form.submit("Save").render().unwrap();
/// html += &form.close();
///
/// assert!(html.contains(r#"id="user-name""#));
/// assert!(html.contains(r#"name="_method" value="PUT""#));
/// ```
#[derive(Debug, Default)]
pub struct FormBuilder {
    state: FormState,
    services: Services,
}

impl FormBuilder {
    /// Creates a builder with default collaborators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder around a full set of collaborators.
    pub fn with_services(services: Services) -> Self {
        Self {
            state: FormState::default(),
            services,
        }
    }

    /// Sets the CSRF fragment provider.
    #[must_use]
    pub fn with_csrf(mut self, provider: impl CsrfProvider + 'static) -> Self {
        self.services.csrf = Box::new(provider);
        self
    }

    /// Sets the method-override fragment provider.
    #[must_use]
    pub fn with_method_override(mut self, provider: impl MethodOverride + 'static) -> Self {
        self.services.method_override = Box::new(provider);
        self
    }

    /// Sets the URL resolver.
    #[must_use]
    pub fn with_urls(mut self, resolver: impl UrlResolver + 'static) -> Self {
        self.services.urls = Box::new(resolver);
        self
    }

    /// Sets the translation lookup.
    #[must_use]
    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.services.translator = Box::new(translator);
        self
    }

    /// Attaches the results of a validation pass.
    #[must_use]
    pub fn with_errors(mut self, errors: impl ErrorStore + 'static) -> Self {
        self.services.errors = Some(Box::new(errors));
        self
    }

    /// Attaches resubmitted input from a failed submission.
    #[must_use]
    pub fn with_old_input(mut self, input: impl OldInput + 'static) -> Self {
        self.services.old_input = Some(Box::new(input));
        self
    }

    /// Returns the current form-level settings.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub(crate) fn services(&self) -> &Services {
        &self.services
    }

    /// Applies serializable settings in one go.
    pub fn configure(&mut self, config: &FormConfig) -> Result<&mut Self> {
        let horizontal = config.validate()?;
        self.method(&config.method)
            .multipart(config.multipart)
            .id_prefix(&config.id_prefix)
            .inline_form(config.inline)
            .horizontal_form(horizontal);
        self.state.locale.clone_from(&config.locale);
        Ok(self)
    }

    /// Sets the HTTP method.
    pub fn method(&mut self, method: &str) -> &mut Self {
        self.state.method = method.trim().to_lowercase();
        self
    }

    pub fn get(&mut self) -> &mut Self {
        self.method("get")
    }

    pub fn post(&mut self) -> &mut Self {
        self.method("post")
    }

    pub fn put(&mut self) -> &mut Self {
        self.method("put")
    }

    pub fn patch(&mut self) -> &mut Self {
        self.method("patch")
    }

    pub fn delete(&mut self) -> &mut Self {
        self.method("delete")
    }

    /// Makes the form post `multipart/form-data`.
    pub fn multipart(&mut self, multipart: bool) -> &mut Self {
        self.state.multipart = multipart;
        self
    }

    /// Prefixes every generated id.
    pub fn id_prefix(&mut self, prefix: &str) -> &mut Self {
        self.state.id_prefix = prefix.to_string();
        self
    }

    /// Sets the translation namespace used for labels.
    pub fn locale(&mut self, namespace: &str) -> &mut Self {
        self.state.locale = Some(namespace.to_string());
        self
    }

    /// Switches the inline layout on or off. Turning it on drops any
    /// horizontal layout.
    pub fn inline_form(&mut self, inline: bool) -> &mut Self {
        self.state.inline = inline;
        if inline {
            self.state.horizontal = None;
        }
        self
    }

    /// Sets or clears the horizontal layout. Setting one turns off the
    /// inline layout.
    pub fn horizontal_form(&mut self, layout: Option<HorizontalLayout>) -> &mut Self {
        if layout.is_some() {
            self.state.inline = false;
        }
        self.state.horizontal = layout;
        self
    }

    /// Sets the horizontal layout from loosely-typed settings, see
    /// [`HorizontalLayout::from_value`].
    pub fn horizontal_form_value(&mut self, settings: &Value) -> Result<&mut Self> {
        let layout = HorizontalLayout::from_value(settings)?;
        Ok(self.horizontal_form(layout))
    }

    /// Binds a record whose fields supply default values.
    ///
    /// Anything that does not serialize to a map binds an empty record.
    pub fn fill<T: Serialize + ?Sized>(&mut self, record: &T) -> &mut Self {
        let data = match serde_json::to_value(record) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                warn!(kind = value_kind(&other), "Bound record is not a map; binding nothing");
                Map::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to serialize bound record; binding nothing");
                Map::new()
            }
        };
        self.state.data = Some(data);
        self
    }

    /// Binds an already-built map of field values.
    pub fn fill_map(&mut self, data: Map<String, Value>) -> &mut Self {
        self.state.data = Some(data);
        self
    }

    /// Renders `</form>` and resets every form-level setting.
    pub fn close(&mut self) -> String {
        self.state = FormState::default();
        debug!("Closed form");
        "</form>".to_string()
    }

    /// Renders `</fieldset>`.
    pub fn fieldset_close(&self) -> String {
        "</fieldset>".to_string()
    }

    /// Starts a field with no kind; set one with [`Field::kind`].
    pub fn field(&self) -> Field<'_> {
        Field::new(self, FieldState::default())
    }

    fn start(&self, kind: FieldKind) -> Field<'_> {
        Field::new(self, FieldState::for_kind(kind))
    }

    fn named(&self, kind: FieldKind, name: &str, label: Label) -> Field<'_> {
        self.start(kind).name(name).label(label)
    }

    /// Starts the opening `<form>` tag. Set its action with
    /// [`Field::url`] or [`Field::route`].
    pub fn open(&self) -> Field<'_> {
        self.start(FieldKind::Open)
    }

    /// Starts an opening `<fieldset>` with an optional legend.
    pub fn fieldset_open(&self, legend: Option<&str>) -> Field<'_> {
        let mut field = self.start(FieldKind::FieldsetOpen);
        field.state.meta.legend = legend.map(str::to_string);
        field
    }

    pub fn file(&self, name: &str, label: impl Into<Label>) -> Field<'_> {
        self.named(FieldKind::File, name, label.into())
    }

    pub fn text(&self, name: &str, label: impl Into<Label>) -> Field<'_> {
        self.named(FieldKind::Text, name, label.into())
    }

    pub fn password(&self, name: &str, label: impl Into<Label>) -> Field<'_> {
        self.named(FieldKind::Password, name, label.into())
    }

    pub fn range(&self, name: &str, label: impl Into<Label>) -> Field<'_> {
        self.named(FieldKind::Range, name, label.into())
    }

    pub fn email(&self, name: &str, label: impl Into<Label>) -> Field<'_> {
        self.named(FieldKind::Email, name, label.into())
    }

    pub fn number(&self, name: &str, label: impl Into<Label>) -> Field<'_> {
        self.named(FieldKind::Number, name, label.into())
    }

    pub fn textarea(&self, name: &str, label: impl Into<Label>) -> Field<'_> {
        self.named(FieldKind::Textarea, name, label.into())
    }

    /// Starts a hidden input. Hidden inputs have no label or wrapper.
    pub fn hidden(&self, name: &str) -> Field<'_> {
        self.start(FieldKind::Hidden).name(name)
    }

    /// Starts a select over `options`.
    pub fn select(
        &self,
        name: &str,
        label: impl Into<Label>,
        options: impl Into<SelectOptions>,
    ) -> Field<'_> {
        self.named(FieldKind::Select, name, label.into())
            .options(options)
    }

    /// Starts a checkbox submitting `value`, or the name when `value` is
    /// `None`.
    pub fn checkbox(&self, name: &str, label: impl Into<Label>, value: Option<&str>) -> Field<'_> {
        self.check(FieldKind::Checkbox, name, label.into(), value)
    }

    /// Starts one radio option submitting `value`, or the name when `value`
    /// is `None`.
    pub fn radio(&self, name: &str, label: impl Into<Label>, value: Option<&str>) -> Field<'_> {
        self.check(FieldKind::Radio, name, label.into(), value)
    }

    fn check(&self, kind: FieldKind, name: &str, label: Label, value: Option<&str>) -> Field<'_> {
        let mut field = self.named(kind, name, label);
        field.state.meta.check_value = Some(value.unwrap_or(name).to_string());
        field
    }

    /// Starts a `<button type="button">` captioned `caption`.
    pub fn button(&self, caption: &str) -> Field<'_> {
        self.start(FieldKind::Button).value(caption)
    }

    pub fn submit(&self, caption: &str) -> Field<'_> {
        self.start(FieldKind::Submit).value(caption)
    }

    pub fn reset(&self, caption: &str) -> Field<'_> {
        self.start(FieldKind::Reset).value(caption)
    }

    /// Starts a button-styled link. Without a URL the link goes nowhere.
    pub fn anchor(&self, caption: &str, url: Option<&str>) -> Field<'_> {
        let field = self.start(FieldKind::Anchor).value(caption);
        match url {
            Some(url) => field.url(url),
            None => field,
        }
    }
}

/// Configuration for one control, consumed by [`render`](Field::render).
#[derive(Debug)]
#[must_use = "a field produces no markup until it is rendered"]
pub struct Field<'f> {
    form: &'f FormBuilder,
    state: FieldState,
    misuse: Option<String>,
}

impl<'f> Field<'f> {
    fn new(form: &'f FormBuilder, state: FieldState) -> Self {
        Self {
            form,
            state,
            misuse: None,
        }
    }

    /// Returns the configuration collected so far.
    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Sets the kind of control to render.
    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.state.kind = Some(kind);
        self
    }

    /// Overrides the generated id.
    pub fn id(mut self, id: &str) -> Self {
        self.state.id = Some(id.to_string());
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.state.name = Some(name.to_string());
        self
    }

    /// Sets the label; `true` uses the field name.
    pub fn label(mut self, label: impl Into<Label>) -> Self {
        self.state.label = label.into();
        self
    }

    /// Sets the value. `null` leaves the current value alone.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        let value = value.into();
        if !value.is_null() {
            self.state.value = Some(value);
        }
        self
    }

    /// Checks or unchecks a checkbox or radio.
    ///
    /// A checked radio takes its own option value, so it matches when
    /// rendered.
    pub fn checked(mut self, checked: bool) -> Self {
        let kind = self.state.kind;
        match kind {
            Some(FieldKind::Radio) if checked => {
                let value = self.state.meta.check_value.clone().map_or(Value::Null, Value::from);
                self.value(value)
            }
            Some(kind) if kind.is_check() => self.value(checked),
            kind => {
                self.misuse = Some(format!(
                    "checked() applies to checkboxes and radios, not {}",
                    kind.map_or_else(|| "an untyped field".to_string(), |k| k.to_string())
                ));
                self
            }
        }
    }

    /// Sets select options.
    pub fn options(mut self, options: impl Into<SelectOptions>) -> Self {
        self.state.options = options.into();
        self
    }

    /// Sets select options from loosely-typed data, see
    /// [`SelectOptions::from_value`].
    pub fn options_from_value(self, options: &Value) -> Result<Self> {
        Ok(self.options(SelectOptions::from_value(options)?))
    }

    /// Sets select options from a list of records.
    pub fn options_from_records(
        self,
        records: &Value,
        value_field: &str,
        label_field: &str,
    ) -> Result<Self> {
        Ok(self.options(SelectOptions::from_records(records, value_field, label_field)?))
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.state.placeholder = Some(placeholder.to_string());
        self
    }

    /// Adds help text below the control.
    pub fn help(mut self, text: &str) -> Self {
        self.state.help = Some(text.to_string());
        self
    }

    /// Lays checkboxes and radios out side by side.
    pub fn inline(mut self, inline: bool) -> Self {
        self.state.check_inline = inline;
        self
    }

    /// Sets the size modifier (`sm`, `lg`).
    pub fn size(mut self, size: &str) -> Self {
        self.state.size = Some(size.to_string());
        self
    }

    pub fn lg(self) -> Self {
        self.size("lg")
    }

    pub fn sm(self) -> Self {
        self.size("sm")
    }

    /// Sets the button color.
    pub fn color(mut self, color: &str) -> Self {
        self.state.color = color.to_string();
        self
    }

    pub fn primary(self) -> Self {
        self.color("primary")
    }

    pub fn secondary(self) -> Self {
        self.color("secondary")
    }

    pub fn success(self) -> Self {
        self.color("success")
    }

    pub fn danger(self) -> Self {
        self.color("danger")
    }

    pub fn warning(self) -> Self {
        self.color("warning")
    }

    pub fn info(self) -> Self {
        self.color("info")
    }

    pub fn light(self) -> Self {
        self.color("light")
    }

    pub fn dark(self) -> Self {
        self.color("dark")
    }

    pub fn link(self) -> Self {
        self.color("link")
    }

    pub fn outline(mut self, outline: bool) -> Self {
        self.state.outline = outline;
        self
    }

    pub fn block(mut self, block: bool) -> Self {
        self.state.block = block;
        self
    }

    pub fn readonly(mut self, readonly: bool) -> Self {
        self.state.readonly = readonly;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.state.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.state.required = required;
        self
    }

    /// Turns browser autocompletion on or off (off by default).
    pub fn autocomplete(mut self, enabled: bool) -> Self {
        self.state.autocomplete = if enabled { "on" } else { "off" }.to_string();
        self
    }

    /// Lets a select accept several values.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.state.multiple = multiple;
        self
    }

    /// Sets the form action or anchor href, resolved through the URL
    /// resolver.
    pub fn url(mut self, path: &str) -> Self {
        self.state.url = Some(self.form.services().urls.url(path));
        self
    }

    /// Sets the form action or anchor href from a named route.
    pub fn route(mut self, name: &str, params: &[(&str, &str)]) -> Result<Self> {
        self.state.url = Some(self.form.services().urls.route(name, params)?);
        Ok(self)
    }

    /// Sets the legend of a fieldset.
    pub fn legend(mut self, legend: &str) -> Self {
        self.state.meta.legend = Some(legend.to_string());
        self
    }

    /// Merges attributes into the control's own attributes.
    pub fn attrs(mut self, attrs: impl Into<AttributeSet>) -> Self {
        self.state.attrs.merge(&attrs.into());
        self
    }

    /// Sets one attribute on the control.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.state.attrs.set(name, value);
        self
    }

    /// Sets a `data-*` attribute on the control.
    pub fn data(self, key: &str, value: &str) -> Self {
        self.attr(&format!("data-{key}"), value)
    }

    /// Sets several `data-*` attributes on the control.
    pub fn data_attrs<'a>(self, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        pairs
            .into_iter()
            .fold(self, |field, (key, value)| field.data(key, value))
    }

    /// Adds classes to the control.
    pub fn with_class(mut self, class: &str) -> Self {
        self.state.attrs.add_class(class);
        self
    }

    /// Merges attributes into the wrapping div.
    pub fn attrs_wrapper(mut self, attrs: impl Into<AttributeSet>) -> Self {
        self.state.wrapper_attrs.merge(&attrs.into());
        self
    }

    /// Adds classes to the wrapping div.
    pub fn with_class_on_wrapper(mut self, class: &str) -> Self {
        self.state.wrapper_attrs.add_class(class);
        self
    }

    /// Merges attributes into the label.
    pub fn attrs_label(mut self, attrs: impl Into<AttributeSet>) -> Self {
        self.state.label_attrs.merge(&attrs.into());
        self
    }

    /// Adds classes to the label.
    pub fn with_class_on_label(mut self, class: &str) -> Self {
        self.state.label_attrs.add_class(class);
        self
    }

    /// Renders the control, consuming its configuration.
    pub fn render(self) -> Result<String> {
        if let Some(message) = self.misuse {
            return Err(FormError::Misuse(message));
        }
        widgets::render(self.form, &self.state)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
