use crate::domain::GeoPoint;
use crate::location::PositionSink;
use serde::Serialize;

/// Fields the user types into. Latitude and longitude are not here: they
/// only change through the location reconciler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportField {
    Nama,
    Email,
    Telepon,
    Lokasi,
    Operator,
    ImgUrl,
    Keterangan,
}

impl ReportField {
    pub const ALL: [Self; 7] = [
        Self::Nama,
        Self::Email,
        Self::Telepon,
        Self::Lokasi,
        Self::Operator,
        Self::ImgUrl,
        Self::Keterangan,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nama => "nama",
            Self::Email => "email",
            Self::Telepon => "telepon",
            Self::Lokasi => "lokasi",
            Self::Operator => "operator",
            Self::ImgUrl => "imgUrl",
            Self::Keterangan => "keterangan",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == value)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Nama => "Nama",
            Self::Email => "Email",
            Self::Telepon => "Telepon",
            Self::Lokasi => "Lokasi",
            Self::Operator => "Operator",
            Self::ImgUrl => "Gambar (Jpeg, Png)",
            Self::Keterangan => "Keterangan",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Nama => "Masukkan nama lengkap Anda",
            Self::Email => "Alamat email aktif Anda",
            Self::Telepon => "Nomor telepon yang dapat dihubungi",
            Self::Lokasi => "Alamat lengkap lokasi blank spot",
            Self::Operator => "Nama operator seluler (Telkomsel, XL, Indosat, dll.)",
            Self::ImgUrl => "Foto lokasi blankspot",
            Self::Keterangan => "Masukkan keterangan",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportForm {
    nama: String,
    email: String,
    telepon: String,
    lokasi: String,
    operator: String,
    img_url: String,
    keterangan: String,
    latitude: String,
    longitude: String,
}

impl ReportForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: ReportField) -> &str {
        match field {
            ReportField::Nama => &self.nama,
            ReportField::Email => &self.email,
            ReportField::Telepon => &self.telepon,
            ReportField::Lokasi => &self.lokasi,
            ReportField::Operator => &self.operator,
            ReportField::ImgUrl => &self.img_url,
            ReportField::Keterangan => &self.keterangan,
        }
    }

    fn field_mut(&mut self, field: ReportField) -> &mut String {
        match field {
            ReportField::Nama => &mut self.nama,
            ReportField::Email => &mut self.email,
            ReportField::Telepon => &mut self.telepon,
            ReportField::Lokasi => &mut self.lokasi,
            ReportField::Operator => &mut self.operator,
            ReportField::ImgUrl => &mut self.img_url,
            ReportField::Keterangan => &mut self.keterangan,
        }
    }

    pub fn set_field(&mut self, field: ReportField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    pub fn push_char(&mut self, field: ReportField, ch: char) {
        self.field_mut(field).push(ch);
    }

    pub fn pop_char(&mut self, field: ReportField) {
        self.field_mut(field).pop();
    }

    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    pub fn longitude(&self) -> &str {
        &self.longitude
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn payload(&self) -> ReportPayload {
        ReportPayload {
            nama: self.nama.clone(),
            email: self.email.clone(),
            telepon: self.telepon.clone(),
            lokasi: self.lokasi.clone(),
            latitude: self.latitude.clone(),
            longitude: self.longitude.clone(),
            operator: self.operator.clone(),
            keterangan: self.keterangan.clone(),
            img_url: self.img_url.clone(),
        }
    }
}

impl PositionSink for ReportForm {
    fn sync_position(&mut self, point: GeoPoint) {
        self.latitude = point.latitude().to_string();
        self.longitude = point.longitude().to_string();
    }
}

/// JSON body of `POST /api/report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPayload {
    pub nama: String,
    pub email: String,
    pub telepon: String,
    pub lokasi: String,
    pub latitude: String,
    pub longitude: String,
    pub operator: String,
    pub keterangan: String,
    #[serde(rename = "imgUrl")]
    pub img_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_is_idempotent() {
        let mut once = ReportForm::new();
        once.set_field(ReportField::Nama, "Baiq Nurul");

        let mut twice = ReportForm::new();
        twice.set_field(ReportField::Nama, "Baiq Nurul");
        twice.set_field(ReportField::Nama, "Baiq Nurul");

        assert_eq!(once, twice);
        assert_eq!(twice.field(ReportField::Nama), "Baiq Nurul");
    }

    #[test]
    fn set_field_overwrites_only_its_field() {
        let mut form = ReportForm::new();
        form.set_field(ReportField::Operator, "XL");
        form.set_field(ReportField::Operator, "Telkomsel");
        form.push_char(ReportField::Keterangan, 'x');
        form.pop_char(ReportField::Keterangan);

        assert_eq!(form.field(ReportField::Operator), "Telkomsel");
        assert_eq!(form.field(ReportField::Keterangan), "");
        assert_eq!(form.field(ReportField::Email), "");
    }

    #[test]
    fn payload_uses_wire_field_names() -> Result<(), Box<dyn std::error::Error>> {
        let mut form = ReportForm::new();
        form.set_field(ReportField::ImgUrl, "C:\\fakepath\\sinyal.jpg");
        form.sync_position(GeoPoint::new(-8.5, 116.1)?);

        let json = serde_json::to_value(form.payload())?;
        let object = json.as_object().ok_or("payload should be an object")?;

        let mut keys = object.keys().map(String::as_str).collect::<Vec<_>>();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "email",
                "imgUrl",
                "keterangan",
                "latitude",
                "lokasi",
                "longitude",
                "nama",
                "operator",
                "telepon"
            ]
        );
        assert_eq!(json["latitude"], "-8.5");
        assert_eq!(json["longitude"], "116.1");
        assert_eq!(json["imgUrl"], "C:\\fakepath\\sinyal.jpg");
        Ok(())
    }

    #[test]
    fn field_names_round_trip() {
        for field in ReportField::ALL {
            assert_eq!(ReportField::parse(field.as_str()), Some(field));
        }
        assert_eq!(ReportField::parse("latitude"), None);
    }
}
