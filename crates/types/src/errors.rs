//! Validation errors for user-submitted forms
//!
//! Messages are Korean and user-facing; handlers return them verbatim.

use thiserror::Error;

/// Field-level validation failures for inquiry and calculation forms.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
	#[error("이름을 입력해주세요.")]
	MissingName,

	#[error("이름은 {max}자 이내로 입력해주세요.")]
	NameTooLong { max: usize },

	#[error("연락처 형식이 올바르지 않습니다.")]
	InvalidPhone,

	#[error("이메일 형식이 올바르지 않습니다.")]
	InvalidEmail,

	#[error("문의 내용을 입력해주세요.")]
	MissingMessage,

	#[error("문의 내용은 {max}자 이내로 입력해주세요.")]
	MessageTooLong { max: usize },

	#[error("개인정보 수집 및 이용에 동의해주세요.")]
	PrivacyNotAgreed,

	#[error("{field} 값은 0보다 커야 합니다.")]
	NonPositive { field: &'static str },

	#[error("{field} 값이 허용 범위를 벗어났습니다.")]
	OutOfRange { field: &'static str },

	#[error("지원하지 않는 업종입니다: {category}")]
	UnknownCategory { category: String },

	#[error("요청 형식이 올바르지 않습니다: {reason}")]
	MalformedForm { reason: String },
}
