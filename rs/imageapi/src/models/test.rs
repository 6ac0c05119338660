#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;

    use crate::error::ImageApiError;
    use crate::models::{
        ImageFormat, ImageInfo, ImageQuery, ImageType, ImageUpload, TaggedImage, UploadEncoding,
    };

    #[rstest]
    #[case(ImageType::Primary, "Primary")]
    #[case(ImageType::BoxRear, "BoxRear")]
    #[case(ImageType::Screenshot, "Screenshot")]
    fn test_image_type_wire_name(#[case] image_type: ImageType, #[case] expected: &str) {
        assert_eq!(image_type.to_string(), expected);
        assert_eq!(
            serde_json::to_string(&image_type).expect("serializable"),
            format!("\"{expected}\"")
        );
        assert_eq!(expected.to_lowercase().parse::<ImageType>(), Ok(image_type));
    }

    #[test]
    fn test_image_type_unknown() {
        assert!("Poster".parse::<ImageType>().is_err());
    }

    #[rstest]
    #[case("image/jpeg", Some(ImageFormat::Jpg))]
    #[case("image/jpg", Some(ImageFormat::Jpg))]
    #[case("IMAGE/PNG", Some(ImageFormat::Png))]
    #[case("image/webp; charset=binary", Some(ImageFormat::Webp))]
    #[case("image/svg+xml", Some(ImageFormat::Svg))]
    #[case("application/json", None)]
    fn test_image_format_from_mime_type(
        #[case] mime_type: &str,
        #[case] expected: Option<ImageFormat>,
    ) {
        assert_eq!(ImageFormat::from_mime_type(mime_type), expected);
    }

    #[rstest]
    #[case("jpeg", Some(ImageFormat::Jpg))]
    #[case(".PNG", Some(ImageFormat::Png))]
    #[case("gif", Some(ImageFormat::Gif))]
    #[case("tiff", None)]
    fn test_image_format_from_extension(
        #[case] extension: &str,
        #[case] expected: Option<ImageFormat>,
    ) {
        assert_eq!(ImageFormat::from_extension(extension), expected);
    }

    #[test]
    fn test_image_info_deserializes_server_payload() -> Result<(), serde_json::Error> {
        let payload = r#"[
            {
                "ImageType": "Primary",
                "ImageTag": "2d5f4e1a0b9c",
                "Path": "/config/metadata/library/ab/poster.jpg",
                "BlurHash": "WJF5?Z~q-;xu%MofWBWBofof",
                "Height": 1500,
                "Width": 1000,
                "Size": 231055
            },
            {
                "ImageType": "Backdrop",
                "ImageIndex": 1,
                "Size": 0,
                "SomethingNew": true
            }
        ]"#;
        let infos: Vec<ImageInfo> = serde_json::from_str(payload)?;
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].image_type, ImageType::Primary);
        assert_eq!(infos[0].index(), 0);
        assert_eq!(infos[0].image_tag.as_deref(), Some("2d5f4e1a0b9c"));
        assert_eq!(infos[0].width, Some(1000));
        assert_eq!(infos[0].size, 231055);
        assert_eq!(infos[1].image_type, ImageType::Backdrop);
        assert_eq!(infos[1].index(), 1);
        assert_eq!(infos[1].blur_hash, None);
        Ok(())
    }

    #[test]
    fn test_image_query_empty() {
        assert!(ImageQuery::new().to_query(&[]).is_empty());
    }

    #[test]
    fn test_image_query_wire_order_and_names() {
        let query = ImageQuery::new()
            .image_index(2)
            .background_color("#101010")
            .format(ImageFormat::Webp)
            .tag("abc")
            .quality(80)
            .max_size(400, 600)
            .percent_played(42.5)
            .unplayed_count(3)
            .fill(200, 300)
            .blur(5)
            .foreground_layer("overlay")
            .size(100, 150)
            .to_query(&[]);
        assert_eq!(
            query.names(),
            vec![
                "maxWidth",
                "maxHeight",
                "width",
                "height",
                "quality",
                "fillWidth",
                "fillHeight",
                "tag",
                "format",
                "percentPlayed",
                "unplayedCount",
                "blur",
                "backgroundColor",
                "foregroundLayer",
                "imageIndex",
            ]
        );
        assert_eq!(query.get("format"), Some("Webp"));
        assert_eq!(query.get("percentPlayed"), Some("42.5"));
        assert_eq!(query.get("backgroundColor"), Some("#101010"));
    }

    #[test]
    fn test_image_query_skips_path_parameters() {
        let query = ImageQuery::new()
            .tag("abc")
            .format(ImageFormat::Png)
            .max_width(300)
            .width(120)
            .image_index(1)
            .to_query(&TaggedImage::PATH_NAMES);
        assert_eq!(query.names(), vec!["width"]);
    }

    #[test]
    fn test_image_query_single_dimension_setters() {
        let query = ImageQuery::new()
            .width(120)
            .height(80)
            .fill_width(640)
            .fill_height(360);
        assert_eq!(query, ImageQuery::new().size(120, 80).fill(640, 360));
        assert_eq!(
            query.to_query(&[]).names(),
            vec!["width", "height", "fillWidth", "fillHeight"]
        );
    }

    #[rstest]
    #[case(ImageQuery::new().quality(100), true)]
    #[case(ImageQuery::new().quality(0), true)]
    #[case(ImageQuery::new().quality(101), false)]
    #[case(ImageQuery::new().percent_played(100.0), true)]
    #[case(ImageQuery::new().percent_played(-1.0), false)]
    #[case(ImageQuery::new().percent_played(f64::NAN), false)]
    fn test_image_query_validate(#[case] query: ImageQuery, #[case] valid: bool) {
        let result = query.validate("getItemImage");
        assert_eq!(result.is_ok(), valid, "{result:?}");
        if let Err(e) = result {
            assert_eq!(e.status(), Some(400));
            assert!(e.is_client_error());
        }
    }

    #[test]
    fn test_image_upload_base64_body() {
        let upload = ImageUpload::with_format(ImageFormat::Png, &b"\x89PNG\r\n"[..]);
        assert_eq!(upload.content_type(), "image/png");
        assert_eq!(upload.encoding(), UploadEncoding::Base64);
        assert_eq!(&upload.body()[..], b"iVBORw0K");
    }

    #[test]
    fn test_image_upload_raw_body() {
        let upload = ImageUpload::new("image/jpeg", vec![0xff, 0xd8, 0xff]).raw();
        assert_eq!(upload.encoding(), UploadEncoding::Raw);
        assert_eq!(&upload.body()[..], &[0xff, 0xd8, 0xff]);
    }

    #[rstest]
    #[case(ImageUpload::new("image/png", vec![1u8]), None)]
    #[case(ImageUpload::new("Image/PNG; q=1", vec![1u8]), None)]
    #[case(ImageUpload::new("image/png", Vec::<u8>::new()), Some("body"))]
    #[case(ImageUpload::new("text/plain", vec![1u8]), Some("Content-Type"))]
    fn test_image_upload_validate(
        #[case] upload: ImageUpload,
        #[case] rejected: Option<&'static str>,
    ) {
        match (upload.validate("setItemImage"), rejected) {
            (Ok(()), None) => {}
            (Err(ImageApiError::MissingParameter { parameter, .. }), Some(expected))
            | (Err(ImageApiError::InvalidParameter { parameter, .. }), Some(expected)) => {
                assert_eq!(parameter, expected)
            }
            (result, expected) => panic!("unexpected {result:?} for {expected:?}"),
        }
    }

    #[tokio::test]
    async fn test_image_upload_from_file() -> Result<(), ImageApiError> {
        let mut file = tempfile::Builder::new().suffix(".jpeg").tempfile()?;
        file.write_all(&[0xff, 0xd8, 0xff, 0xe0])?;
        let upload = ImageUpload::from_file(file.path()).await?;
        assert_eq!(upload.content_type(), "image/jpeg");
        assert_eq!(upload.data().len(), 4);
        Ok(())
    }
}
