//! 厂商协议 stub handlers
//!
//! 训练界面的协议对照页会直接打这两个端点：
//! - GET /axis-cgi/param.cgi - Axis VAPIX 参数列表（key=value 文本）
//! - POST /onvif/device_service - ONVIF GetDeviceInformation（SOAP XML）
//!
//! 返回内容为固定样本，不做参数解析。

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

const AXIS_PARAM_BODY: &str = "root.Brand.Brand=AXIS\n\
root.Brand.ProdFullName=AXIS P3265-LV Dome Camera\n\
root.Brand.ProdNbr=P3265-LV\n\
root.Network.HostName=axis-p3265lv\n\
root.Properties.Firmware.Version=11.9.60\n\
root.Properties.PTZ.PTZ=no\n";

const ONVIF_DEVICE_INFO_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://www.w3.org/2003/05/soap-envelope" xmlns:tds="http://www.onvif.org/ver10/device/wsdl">
  <SOAP-ENV:Body>
    <tds:GetDeviceInformationResponse>
      <tds:Manufacturer>AXIS</tds:Manufacturer>
      <tds:Model>P3265-LV</tds:Model>
      <tds:FirmwareVersion>11.9.60</tds:FirmwareVersion>
      <tds:SerialNumber>ACCC8E012345</tds:SerialNumber>
      <tds:HardwareId>758</tds:HardwareId>
    </tds:GetDeviceInformationResponse>
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>
"#;

/// Axis VAPIX 参数列表 stub
pub async fn axis_param_cgi() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        AXIS_PARAM_BODY,
    )
        .into_response()
}

/// ONVIF 设备信息 stub
pub async fn onvif_device_service() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/soap+xml; charset=utf-8")],
        ONVIF_DEVICE_INFO_BODY,
    )
        .into_response()
}
