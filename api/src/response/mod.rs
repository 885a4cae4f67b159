use serde::Serialize;

/// JSON envelope used by every endpoint except report generation:
///
/// ```json
/// { "success": true, "data": { "id": 1, "name": "Ann" }, "message": "Student retrieved successfully" }
/// ```
///
/// Error responses carry `data: T::default()`.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Error response with a default payload.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}
