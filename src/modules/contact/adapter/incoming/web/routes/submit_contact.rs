use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactError;
use crate::modules::contact::domain::ContactMessage;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const CONTACT_THANK_YOU: &str =
    "Thank you for your message! I will get back to you shortly.";

#[derive(Deserialize, ToSchema)]
pub struct ContactRequestDto {
    #[schema(example = "Ada Lovelace")]
    #[serde(default)]
    pub name: String,
    #[schema(example = "ada@example.com")]
    #[serde(default)]
    pub email: String,
    #[schema(example = "I'd like to talk about a project.")]
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ContactResponseBody {
    #[schema(example = "Thank you for your message! I will get back to you shortly.")]
    message: String,
}

/// Submit the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequestDto,
    responses(
        (status = 200, description = "Message accepted", body = inline(SuccessResponse<ContactResponseBody>)),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 500, description = "Delivery failed", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let message = match ContactMessage::new(&dto.name, &dto.email, &dto.message) {
        Ok(m) => m,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.submit_contact_use_case.execute(message).await {
        Ok(()) => {
            info!("Contact message accepted");
            ApiResponse::success(ContactResponseBody {
                message: CONTACT_THANK_YOU.to_string(),
            })
        }
        Err(SubmitContactError::DeliveryFailed(ref e)) => {
            error!(error = %e, "Contact message could not be delivered");
            ApiResponse::internal_error()
        }
    }
}
