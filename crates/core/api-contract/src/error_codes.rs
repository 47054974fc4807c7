//! 错误码常量
//!
//! 业务错误码使用厂商风格的异常标签（训练前端按字面值匹配展示文案），
//! 通用错误使用点分风格。

pub const CARDHOLDER_NOT_FOUND: &str = "CardholderNotFoundException";
pub const ACCESS_GROUP_NOT_FOUND: &str = "AccessGroupNotFoundException";
pub const INVALID_ACCESS_GROUP: &str = "InvalidAccessGroupException";
pub const DUPLICATE_ACCESS_GROUP: &str = "DuplicateAccessGroupException";
pub const DUPLICATE_MEMBER: &str = "DuplicateMemberException";
pub const MEMBER_NOT_FOUND: &str = "MemberNotFoundException";

pub const ENDPOINT_NOT_FOUND: &str = "ENDPOINT.NOT_FOUND";
pub const RESOURCE_NOT_FOUND: &str = "RESOURCE.NOT_FOUND";
pub const INVALID_REQUEST: &str = "INVALID.REQUEST";
pub const INTERNAL_ERROR: &str = "INTERNAL.ERROR";
