//! Multipart form extraction for image-bearing resources.
//!
//! Text parts become a JSON object that is deserialized into the resource's
//! input DTO; the single file part named `image` becomes an [`Upload`].
//! Blank text parts are dropped, so an empty optional field reads as absent.

use axum::extract::multipart::MultipartError;
use axum::extract::{FromRequest, Multipart, Request};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use unisoc_core::validation::FieldErrors;
use unisoc_media::Upload;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Name of the multipart part carrying the image file.
pub const IMAGE_FIELD: &str = "image";

/// Whether a form must carry an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRule {
    Required,
    Optional,
}

/// A parsed `multipart/form-data` body.
#[derive(Debug, Default)]
pub struct ImageForm {
    fields: Map<String, Value>,
    image: Option<Upload>,
}

impl ImageForm {
    /// Deserialize and validate the text fields, and check the image.
    ///
    /// Field errors and image errors are reported together in one map, and
    /// nothing has been uploaded yet when this fails.
    pub fn validated<T>(self, max_bytes: usize, rule: ImageRule) -> AppResult<(T, Option<Upload>)>
    where
        T: DeserializeOwned + Validate,
    {
        let input: T = serde_json::from_value(Value::Object(self.fields))
            .map_err(|e| AppError::BadRequest(format!("Invalid form fields: {e}")))?;

        let mut errors = match input.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(&e),
        };
        match (&self.image, rule) {
            (Some(upload), _) => {
                if let Err(e) = upload.inspect(max_bytes) {
                    errors.add(IMAGE_FIELD, e.to_string());
                }
            }
            (None, ImageRule::Required) => errors.add(IMAGE_FIELD, "Image file is required"),
            (None, ImageRule::Optional) => {}
        }
        errors.into_result()?;

        Ok((input, self.image))
    }
}

impl<S> FromRequest<S> for ImageForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let mut form = ImageForm::default();
        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();

            if name == IMAGE_FIELD {
                if form.image.is_some() {
                    return Err(AppError::BadRequest(
                        "Only one image file may be uploaded".into(),
                    ));
                }
                let file_name = field
                    .file_name()
                    .filter(|n| !n.is_empty())
                    .map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(multipart_error)?;

                // Browsers send an empty, unnamed part when no file was picked.
                if bytes.is_empty() && file_name.is_none() {
                    continue;
                }
                form.image = Some(Upload {
                    bytes: bytes.to_vec(),
                    file_name,
                    content_type,
                });
            } else if field.file_name().is_some() {
                return Err(AppError::BadRequest(format!(
                    "Unexpected file field '{name}'"
                )));
            } else {
                let value = field.text().await.map_err(multipart_error)?;
                let value = value.trim();
                if !value.is_empty() {
                    form.fields.insert(name, Value::String(value.to_string()));
                }
            }
        }

        Ok(form)
    }
}

fn multipart_error(err: MultipartError) -> AppError {
    AppError::BadRequest(err.body_text())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde::Deserialize;
    use unisoc_core::error::CoreError;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct Caption {
        #[serde(default)]
        #[validate(length(min = 2, message = "Caption is too short"))]
        caption: String,
    }

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    fn form(fields: &[(&str, &str)], image: Option<&[u8]>) -> ImageForm {
        ImageForm {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
                .collect(),
            image: image.map(|bytes| Upload {
                bytes: bytes.to_vec(),
                file_name: Some("pic.png".into()),
                content_type: Some("image/png".into()),
            }),
        }
    }

    fn field_errors(err: AppError) -> FieldErrors {
        match err {
            AppError::Core(CoreError::InvalidFields(fields)) => fields,
            other => panic!("expected field errors, got {other:?}"),
        }
    }

    #[test]
    fn valid_form_yields_input_and_image() {
        let (input, image) = form(&[("caption", "Orientation")], Some(PNG))
            .validated::<Caption>(1024, ImageRule::Required)
            .unwrap();
        assert_eq!(input.caption, "Orientation");
        assert_eq!(image.unwrap().bytes, PNG);
    }

    #[test]
    fn missing_required_image_is_reported_with_field_errors() {
        let err = form(&[], None)
            .validated::<Caption>(1024, ImageRule::Required)
            .unwrap_err();
        let fields = field_errors(err);
        assert_eq!(fields.get("image"), Some("Image file is required"));
        assert_eq!(fields.get("caption"), Some("Caption is too short"));
    }

    #[test]
    fn optional_image_may_be_absent() {
        let (_, image) = form(&[("caption", "Welcome")], None)
            .validated::<Caption>(1024, ImageRule::Optional)
            .unwrap();
        assert!(image.is_none());
    }

    #[test]
    fn non_image_bytes_are_a_field_error() {
        let err = form(&[("caption", "Welcome")], Some(b"plain text"))
            .validated::<Caption>(1024, ImageRule::Optional)
            .unwrap_err();
        assert_matches!(field_errors(err).get("image"), Some(msg) if msg.starts_with("Unsupported"));
    }

    #[test]
    fn oversized_image_is_a_field_error() {
        let err = form(&[("caption", "Welcome")], Some(PNG))
            .validated::<Caption>(4, ImageRule::Required)
            .unwrap_err();
        assert!(field_errors(err).get("image").is_some());
    }
}
