//! Fixed Vietnamese copy shown by the booking screens.

/// Minutes a customer has to complete payment before the session lapses.
pub const PAYMENT_WINDOW_MINUTES: u32 = 3;

/// Support hotline printed on the failure screen.
pub const SUPPORT_HOTLINE: &str = "1900000010";

pub const APP_TITLE: &str = "Nha khoa Smile";

// payment failed
pub const PAYMENT_FAILED_TITLE: &str = "Thanh toán thất bại";
pub const PAYMENT_FAILED_SUBTITLE: &str =
    "Giao dịch của bạn chưa được hoàn tất. Vui lòng kiểm tra lại và thử thanh toán lần nữa.";
pub const ERROR_DETAIL_LABEL: &str = "Chi tiết lỗi";
pub const RESERVATION_LABEL: &str = "Mã đặt lịch";
pub const SERVICE_LABEL: &str = "Dịch vụ";
pub const DENTIST_LABEL: &str = "Nha sĩ";
pub const REASONS_HEADING: &str = "Nguyên nhân có thể";
pub const SUPPORT_HEADING: &str = "Cần hỗ trợ?";
pub const SUPPORT_BODY: &str = "Liên hệ tổng đài chăm sóc khách hàng";
pub const RETRY_LABEL: &str = "Thử lại";
pub const HOME_LABEL: &str = "Về trang chủ";

// destinations
pub const HOME_HEADING: &str = "Trang chủ";
pub const HOME_BODY: &str = "Chào mừng bạn đến với Nha khoa Smile.";
pub const BOOK_NOW_LABEL: &str = "Đặt lịch khám";
pub const SELECT_SERVICE_HEADING: &str = "Chọn dịch vụ";
pub const SELECT_SERVICE_BODY: &str = "Chọn dịch vụ nha khoa bạn muốn đặt lịch.";

/// Possible causes of a failed payment, listed on the failure screen in
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum FailureReason {
    InvalidCardDetails,
    InsufficientFunds,
    CardExpiredOrBlocked,
    PaymentWindowExceeded,
}

impl FailureReason {
    pub fn text(&self) -> String {
        match self {
            FailureReason::InvalidCardDetails => "Thông tin thẻ không chính xác".to_string(),
            FailureReason::InsufficientFunds => "Tài khoản không đủ số dư".to_string(),
            FailureReason::CardExpiredOrBlocked => "Thẻ đã hết hạn hoặc bị khóa".to_string(),
            FailureReason::PaymentWindowExceeded => {
                format!("Quá thời gian thanh toán ({PAYMENT_WINDOW_MINUTES} phút)")
            }
        }
    }
}
