// Inline CSS used across the page; the output must not need a stylesheet.

pub const SEASON: &str = "font-size:18pt;font-weight:bold;color:#22B;";
pub const HEADER: &str = "font-size:15pt;font-weight:bold;";
pub const BODY: &str = "font-family:Lucida Grande,Lucida Sans Unicode,Verdana,sans-serif; font-size:11pt; line-height: 180%;";
pub const DATE: &str = "font-size:11pt;color:#22B;";
pub const WARNING: &str = "font-size:11pt;font-weight:bold;color:#D60;";
pub const ERRATA: &str = "color:#909;font-weight:bold;";
pub const ITEM_TYPE: &str = DATE;
pub const ITEM_TITLE: &str = "font-weight:bold;";
pub const DOWNLOAD_LINK: &str = DATE;
