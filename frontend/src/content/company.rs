pub struct ContactDetails {
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

pub const CONTACT: ContactDetails = ContactDetails {
    email: "hello.hynox@gmail.com",
    phone: "+91 9500656339",
    address: "123 Marketing St, Tirupur",
};

pub const FOOTER_SERVICES: &[&str] = &[
    "Meta Ads",
    "Google Ads",
    "Performance Tracking",
    "Conversion Optimization",
];
