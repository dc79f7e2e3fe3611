//! Test fixtures shared by the CSV parser tests

mod sheet_tests;

/// A small export in the shape of the published facility sheet
pub fn create_facility_sheet() -> String {
    [
        "事業所名,住所,電話番号,開所時間,閉所時間,開所日,閉所日,主な通学先,送迎,食事,アピールポイント,pic1,pic2,pic3",
        "ひまわり教室,\"東京都千代田区1-1, 2F\",03-1111-2222,10:00,18:00,月〜土,日曜・祝日,第一小学校・第二小学校,有,無,\"<b>少人数</b>で\"\"じっくり\"\"療育\",https://img.test/a1.jpg,,",
        "にじいろキッズ,大阪府大阪市北区2-2,06-3333-4444,,,,,,無,有,,,,",
        "すまいる,京都府京都市,075-555-6666",
    ]
    .join("\r\n")
}
