#[cfg(test)]
mod tests {
    use binrw::Endian;

    use crate::{
        atom_types::table::read_table,
        decode_rotation_matrix,
        find_many,
        find_tag_offsets,
        mp4_time_zero,
        support::{hex_to_ascii, number_to_hex, string_to_hex, ReadBe},
        Atom,
        AtomDecode,
        AtomHeader,
        AtomType,
        ComponentType,
        Cslg,
        Ctts,
        ErrorKind,
        FourCC,
        Hdlr,
        Headers,
        Matrix,
        Mdhd,
        Mp4,
        Mp4Error,
        Mvhd,
        RotationMatrix,
        Sbgp,
        Sdtp,
        Sgpd,
        Stco,
        Stps,
        Stsc,
        Stsd,
        Stss,
        Stsz,
        Stts,
        Tkhd,
        Udta,
    };

    const IDENTITY: [i32; 9] = [0x0001_0000, 0, 0, 0, 0x0001_0000, 0, 0, 0, 0x4000_0000];
    /// 90 degrees clockwise
    const ROTATE_90: [i32; 9] = [0, 0x0001_0000, 0, -0x0001_0000, 0, 0, 0, 0, 0x4000_0000];

    /// Atom with 32-bit size, FourCC, and `body`.
    fn atom(name: &[u8; 4], body: &[u8]) -> Vec<u8> {
        let mut bytes = ((body.len() + 8) as u32).to_be_bytes().to_vec();
        bytes.extend_from_slice(name);
        bytes.extend_from_slice(body);
        bytes
    }

    fn be32(values: &[u32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_be_bytes()).collect()
    }

    fn matrix_bytes(matrix: &[i32; 9]) -> Vec<u8> {
        matrix.iter().flat_map(|v| v.to_be_bytes()).collect()
    }

    fn mvhd(time_scale: u32, duration: u32, matrix: &[i32; 9]) -> Vec<u8> {
        let body = [
            be32(&[0, 0, 3600, time_scale, duration, 0x0001_0000]),
            vec![1, 0],
            vec![0; 10],
            matrix_bytes(matrix),
            be32(&[0, 0, 0, 0, 0, 0, 2]),
        ].concat();
        atom(b"mvhd", &body)
    }

    fn tkhd(track_id: u32, matrix: &[i32; 9]) -> Vec<u8> {
        let body = [
            be32(&[0, 0, 0, track_id, 0, 90_000]),
            vec![0; 8],
            vec![0, 0, 0, 0, 1, 0, 0, 0],
            matrix_bytes(matrix),
            be32(&[1920 << 16, 1080 << 16]),
        ].concat();
        atom(b"tkhd", &body)
    }

    fn hdlr(sub_type: &[u8; 4], name: &[u8]) -> Vec<u8> {
        let body = [
            vec![0; 4],
            b"mhlr".to_vec(),
            sub_type.to_vec(),
            vec![0; 12],
            name.to_vec(),
        ].concat();
        atom(b"hdlr", &body)
    }

    fn stsz(sample_size: u32, sizes: &[u32], no_of_entries: u32) -> Vec<u8> {
        let body = [be32(&[0, sample_size, no_of_entries]), be32(sizes)].concat();
        atom(b"stsz", &body)
    }

    fn stco(offsets: &[u32]) -> Vec<u8> {
        let body = [be32(&[0, offsets.len() as u32]), be32(offsets)].concat();
        atom(b"stco", &body)
    }

    #[test]
    fn tag_round_trip() {
        for tag in ["tkhd", "stsz", "moov", "udta", "ftyp", "ptv ", "WLOC"] {
            assert_eq!(hex_to_ascii(&string_to_hex(tag)).as_deref(), Some(tag));
        }
        assert_eq!(string_to_hex("tkhd"), "746b6864");
    }

    #[test]
    fn hex_sign_round_trip() {
        for n in [i32::MIN, -65536, -1, 0, 1, 255, 0x0001_0000, i32::MAX] {
            let hex = number_to_hex(n as i64);
            let parsed = u32::from_str_radix(&hex, 16).unwrap();
            assert_eq!(parsed as i32, n, "{hex}");
        }
        assert_eq!(number_to_hex(-1), "FFFFFFFF");
        assert_eq!(number_to_hex(0), "0");
        assert_eq!(hex_to_ascii("0"), None);
    }

    #[test]
    fn read_be_odd_widths() {
        let data: [u8; 7] = [0xFF, 0xFF, 0xFE, 0x00, 0x00, 0x01, 0x02];
        assert_eq!(data.be_i24(0).unwrap(), -2);
        assert_eq!(data.be_u24(0).unwrap(), 0xFF_FFFE);
        assert_eq!(data.be_u48(1).unwrap(), 0xFFFE_0000_0102);
        assert_eq!(data.be_i48(0).unwrap(), -0x0001_FFFF_FF);
        assert!(matches!(data.be_u32(4), Err(Mp4Error::BoundsError(_))));
    }

    #[test]
    fn fourcc_latin1() {
        let fourcc = FourCC::from_str("©nam");
        assert_eq!(fourcc.to_bytes().unwrap(), [0xA9, b'n', b'a', b'm']);
        assert_eq!(FourCC::from_str("stsz"), FourCC::Stsz);
        assert_eq!(FourCC::from_slice(b"stco"), FourCC::Stco);
        assert!(FourCC::from_str("toolong").to_bytes().is_err());
        assert!(find_tag_offsets("abc", b"abcabc").is_empty());
    }

    #[test]
    fn locator_completeness() {
        let data = [
            atom(b"free", &[0; 4]),
            atom(b"stco", &[0; 8]),
            atom(b"free", &[0; 4]),
            atom(b"stco", &[0; 8]),
        ].concat();

        assert_eq!(find_tag_offsets("stco", &data), vec![16, 44]);
        assert_eq!(find_tag_offsets("free", &data), vec![4, 32]);
        assert!(find_tag_offsets("stsz", &data).is_empty());

        let many = find_many(&["free", "stco", "mdat"], &data);
        assert_eq!(many.len(), 3);
        assert_eq!(many[0], (FourCC::from_str("free"), vec![4, 32]));
        assert_eq!(many[1], (FourCC::Stco, vec![16, 44]));
        assert!(many[2].1.is_empty());
    }

    #[test]
    fn locator_false_positive() {
        // sample data that happens to spell a FourCC
        let data = [
            atom(b"mdat", b"xxstszxx"),
            stsz(0, &[10, 20], 2),
        ].concat();

        // the spurious hit in 'mdat' is reported
        assert_eq!(find_tag_offsets("stsz", &data), vec![10, 20]);
        assert!(Stsz::decode_at(&data, 10).is_err());
        assert_eq!(Stsz::decode_at(&data, 20).unwrap().sizes().collect::<Vec<_>>(), vec![10, 20]);

        let mp4 = Mp4::new(&data);
        assert_eq!(mp4.atoms("stsz").len(), 1);
    }

    #[test]
    fn atom_read() {
        let data = [atom(b"free", &[0; 4]), stco(&[1])].concat();
        let atom = Atom::read(&data, 16).unwrap();
        assert_eq!(atom.name(), &FourCC::Stco);
        assert_eq!(atom.size(), 20);
        assert_eq!(atom.header.offset(), 12);
        assert_eq!(atom.header.tag_offset(), 16);
        assert_eq!(atom.data().len(), 20);
        assert_eq!(atom.data_load().len(), 12);
        assert!(atom.decode::<Stsz>().is_err());
    }

    #[test]
    fn atom_header_default() {
        let header = AtomHeader::default();
        assert_eq!(header.data_size(), 0);
        assert_eq!(header.bounds(), 0 .. 0);
        assert!(!header.contains(0));
    }

    #[test]
    fn atom_malformed_size() {
        let mut data = atom(b"stco", &be32(&[0, 1, 100]));

        // size smaller than header
        data[..4].copy_from_slice(&4_u32.to_be_bytes());
        let err = Atom::read(&data, 4).unwrap_err();
        assert!(matches!(err, Mp4Error::UnexpectedAtomSize{len: 4, offset: 0}));
        assert_eq!(err.kind(), ErrorKind::Malformed);

        // negative size
        data[..4].copy_from_slice(&(-20_i32).to_be_bytes());
        assert_eq!(Atom::read(&data, 4).unwrap_err().kind(), ErrorKind::Malformed);

        // extends past end of buffer
        data[..4].copy_from_slice(&100_u32.to_be_bytes());
        let err = Stco::decode(&data).unwrap_err();
        assert!(matches!(err, Mp4Error::BoundsError(_)));
        assert_eq!(err.kind(), ErrorKind::Malformed);

        // no room for size before FourCC
        assert!(matches!(Atom::read(&data, 2), Err(Mp4Error::BoundsError(_))));
    }

    #[test]
    fn atom_not_found() {
        let data = [atom(b"free", &[0; 4]), stco(&[1])].concat();
        let err = Mvhd::decode(&data).unwrap_err();
        assert!(matches!(&err, Mp4Error::NoSuchAtom(name) if name == "mvhd"));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(Mp4::new(&data).hdlr().unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn atom_unsupported() {
        let data = [
            atom(b"stsh", &[0; 8]),
            atom(b"abcd", &[0; 8]),
        ].concat();

        let err = AtomType::decode(&data, 4).unwrap_err();
        assert!(matches!(&err, Mp4Error::Unsupported(name) if name == "stsh"));
        assert_eq!(err.kind(), ErrorKind::Unsupported);

        let err = AtomType::decode(&data, 20).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
    }

    #[test]
    fn stco_table() {
        let data = [atom(b"free", &[0; 4]), stco(&[100, 4096, 8192])].concat();
        let stco = Stco::decode(&data).unwrap();
        assert_eq!(stco.no_of_entries(), 3);
        assert_eq!(stco.offsets(), &[100, 4096, 8192]);
        assert_eq!(stco.get(1), Some(4096));
        assert_eq!(stco.atom_size(), 28);

        match Mp4::new(&data).decode(16).unwrap() {
            AtomType::Stco(stco) => assert_eq!(stco.offsets(), &[100, 4096, 8192]),
            other => panic!("expected stco, got {other:?}"),
        }
    }

    #[test]
    fn table_mismatch() {
        // 3 entries, 10 byte table
        let data = atom(b"stco", &[be32(&[0, 3]), vec![0; 10]].concat());
        let err = Stco::decode(&data).unwrap_err();
        assert!(matches!(err, Mp4Error::TableMismatch{entries: 3, table_size: 10, ..}));
        assert_eq!(err.kind(), ErrorKind::Malformed);

        // no entries, non-empty table
        let data = atom(b"stco", &be32(&[0, 0, 100]));
        assert!(matches!(Stco::decode(&data), Err(Mp4Error::TableMismatch{..})));

        // entries, empty table
        let data = atom(b"stco", &be32(&[0, 2]));
        assert!(matches!(Stco::decode(&data), Err(Mp4Error::TableMismatch{..})));

        // records narrower than a 32-bit offset
        let data = atom(b"stco", &be32(&[0, 2, 100]));
        assert!(matches!(Stco::decode(&data), Err(Mp4Error::TableMismatch{..})));

        // no entries, no table
        let data = atom(b"stco", &be32(&[0, 0]));
        assert!(Stco::decode(&data).unwrap().is_empty());
    }

    #[test]
    fn table_wide_records() {
        // 2 entries padded to 8 bytes each, only first 4 read
        let data = atom(b"stss", &be32(&[0, 2, 1, 0xDEAD, 31, 0xBEEF]));
        let atom = Atom::read(&data, 4).unwrap();
        assert_eq!(read_table::<u32>(&atom, 16, 2).unwrap(), vec![1, 31]);
        assert_eq!(Stss::decode(&data).unwrap().sync_samples(), &[1, 31]);
    }

    #[test]
    fn stsz_sizes() {
        let data = stsz(0, &[100, 200, 300], 3);
        let sample_sizes = Stsz::decode(&data).unwrap();
        assert_eq!(sample_sizes.no_of_entries(), 3);
        assert_eq!(sample_sizes.sizes().collect::<Vec<_>>(), vec![100, 200, 300]);
        assert_eq!(sample_sizes.size(2), Some(300));
        assert_eq!(sample_sizes.sum(), 600);

        // constant sample size, no table
        let data = stsz(1000, &[], 3);
        let sample_sizes = Stsz::decode(&data).unwrap();
        assert!(sample_sizes.table().is_empty());
        assert_eq!(sample_sizes.sizes().collect::<Vec<_>>(), vec![1000, 1000, 1000]);
        assert_eq!(sample_sizes.size(3), None);
        assert_eq!(sample_sizes.sum(), 3000);
    }

    #[test]
    fn stsz_constant_size_large_count() {
        let data = stsz(1, &[], u32::MAX);
        let sample_sizes = Stsz::decode(&data).unwrap();
        assert_eq!(sample_sizes.no_of_entries(), u32::MAX);
        assert_eq!(sample_sizes.sum(), u32::MAX as u64);
        assert_eq!(sample_sizes.size(u32::MAX as usize - 1), Some(1));

        let mut sizes = sample_sizes.sizes();
        assert_eq!(sizes.next(), Some(1));
        assert_eq!(sizes.size_hint(), (u32::MAX as usize - 1, Some(u32::MAX as usize - 1)));
        assert_eq!(sample_sizes.sizes().nth(1000), Some(1));

        // large counts in run-length tables
        let data = atom(b"stts", &be32(&[0, 1, u32::MAX, 1001]));
        let stts = Stts::decode(&data).unwrap();
        assert_eq!(stts.sample_sum(), u32::MAX as u64);
        assert_eq!(stts.durations().take(2).collect::<Vec<_>>(), vec![1001, 1001]);
    }

    #[test]
    fn stsc_samples_per_chunk() {
        let data = atom(b"stsc", &be32(&[0, 2, 1, 4, 1, 3, 2, 1]));
        let stsc = Stsc::decode(&data).unwrap();
        assert_eq!(stsc.table().len(), 2);
        assert_eq!((stsc.version(), stsc.flags()), (0, 0));
        assert_eq!(stsc.table()[1].first_chunk(), 3);
        assert_eq!(stsc.no_of_samples(0), None);
        assert_eq!(stsc.no_of_samples(1), Some(4));
        assert_eq!(stsc.no_of_samples(2), Some(4));
        assert_eq!(stsc.no_of_samples(3), Some(2));
        assert_eq!(stsc.no_of_samples(10), Some(2));
    }

    #[test]
    fn stts_durations() {
        let data = atom(b"stts", &be32(&[0, 2, 3, 1001, 1, 2002]));
        let stts = Stts::decode(&data).unwrap();
        assert_eq!(stts.len(), 4);
        assert_eq!((stts.version(), stts.flags()), (0, 0));
        assert_eq!(stts.table(), vec![(3, 1001), (1, 2002)]);
        assert_eq!(stts.durations().collect::<Vec<_>>(), vec![1001, 1001, 1001, 2002]);
        assert_eq!(stts.duration(), None);
        assert_eq!(stts.duration_sum(), 5005);
        assert_eq!(stts.sample_sum(), 4);
    }

    #[test]
    fn stsd_descriptions() {
        let entry = [be32(&[16]), b"avc1".to_vec(), vec![0; 6], vec![0, 1]].concat();
        let data = atom(b"stsd", &[be32(&[0, 1]), entry].concat());
        let stsd = Stsd::decode(&data).unwrap();
        assert_eq!(stsd.no_of_entries(), 1);
        assert_eq!(stsd.codec(), Some("avc1"));
        assert_eq!(stsd.descriptions()[0].size(), 16);
        assert_eq!(stsd.descriptions()[0].data_reference_index(), 1);
    }

    #[test]
    fn ctts_cslg_stps() {
        let data = atom(b"ctts", &be32(&[0, 2, 2, 1001, 1, (-1001_i32) as u32]));
        let ctts = Ctts::decode(&data).unwrap();
        assert_eq!(ctts.table()[1].composition_offset(), -1001);
        assert_eq!(ctts.offsets().collect::<Vec<_>>(), vec![1001, 1001, -1001]);

        let data = atom(b"cslg", &be32(&[0, 1001, (-1001_i32) as u32, 2002, 0, 90_090]));
        let cslg = Cslg::decode(&data).unwrap();
        assert_eq!(cslg.least_display_offset(), -1001);
        assert_eq!(cslg.greatest_display_offset(), 2002);
        assert_eq!(cslg.display_end_time(), 90_090);

        let data = atom(b"stps", &be32(&[0, 2, 1, 61]));
        assert_eq!(Stps::decode(&data).unwrap().partial_sync_samples(), &[1, 61]);
    }

    #[test]
    fn sample_groups() {
        let body = [be32(&[0]), b"roll".to_vec(), be32(&[2, 10, 1, 5, 0])].concat();
        let sbgp = Sbgp::decode(&atom(b"sbgp", &body)).unwrap();
        assert_eq!(sbgp.grouping_type(), Some("roll"));
        assert_eq!(sbgp.grouping_type_parameter(), None);
        assert_eq!(sbgp.table()[0].sample_count(), 10);
        assert_eq!(sbgp.table()[1].group_description_index(), 0);

        // version 1 has a grouping type parameter
        let body = [vec![1, 0, 0, 0], b"roll".to_vec(), be32(&[7, 1, 10, 1])].concat();
        let sbgp = Sbgp::decode(&atom(b"sbgp", &body)).unwrap();
        assert_eq!(sbgp.grouping_type_parameter(), Some(7));
        assert_eq!(sbgp.table().len(), 1);

        let body = [be32(&[0]), b"roll".to_vec(), be32(&[2, 1, 0xFFFF])].concat();
        let sgpd = Sgpd::decode(&atom(b"sgpd", &body)).unwrap();
        assert_eq!(sgpd.grouping_type(), Some("roll"));
        assert_eq!(sgpd.default_length(), 2);
        assert_eq!(sgpd.no_of_entries(), 1);
        assert_eq!(sgpd.payload_data(), 0xFFFF);
    }

    #[test]
    fn sdtp_borrowed_count() {
        let sdtp = atom(b"sdtp", &[0, 0, 0, 0, 0x20, 0x10, 0x18, 0x99, 0x10]);
        let data = atom(b"stbl", &[stsz(0, &[1, 2, 3, 4, 5], 5), sdtp].concat());

        let sdtp = Sdtp::decode(&data).unwrap();
        assert_eq!(sdtp.len(), 5);
        let flags = sdtp.sample_flags_table();
        assert_eq!(flags[0].depends_on(), 2);
        assert_eq!(flags[1].depends_on(), 1);
        assert_eq!(flags[2].is_depended_on(), 2);
        assert_eq!(flags[3].is_leading(), 2);
        assert_eq!(flags[3].has_redundancy(), 1);

        let offset = find_tag_offsets("sdtp", &data)[0];
        assert_eq!(Sdtp::decode_at(&data, offset, 5).unwrap().len(), 5);
        assert!(matches!(Sdtp::decode_at(&data, offset, 4), Err(Mp4Error::TableMismatch{..})));

        match AtomType::decode(&data, offset).unwrap() {
            AtomType::Sdtp(sdtp) => assert_eq!(sdtp.len(), 5),
            other => panic!("expected sdtp, got {other:?}"),
        }
    }

    #[test]
    fn sdtp_without_stsz() {
        let data = atom(b"sdtp", &[0, 0, 0, 0, 0x20]);
        assert_eq!(Sdtp::decode(&data).unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn sdtp_count_from_own_track() {
        let trak1 = atom(b"trak", &atom(b"stbl", &stsz(0, &[10, 20], 2)));
        let sdtp = atom(b"sdtp", &[0, 0, 0, 0, 0x10, 0x20, 0x10, 0x20]);
        let trak2 = atom(b"trak", &atom(b"stbl", &[stsz(0, &[1, 2, 3, 4], 4), sdtp].concat()));
        let data = atom(b"moov", &[trak1, trak2].concat());

        let offset = find_tag_offsets("sdtp", &data)[0];
        assert_eq!(Sdtp::sample_count(&data, offset).unwrap(), 4);

        let sdtp = Sdtp::decode(&data).unwrap();
        let flags: Vec<u8> = sdtp.sample_flags_table().iter().map(|f| f.value()).collect();
        assert_eq!(flags, vec![0x10, 0x20, 0x10, 0x20]);
        assert_eq!(Mp4::new(&data).sdtp().unwrap().len(), 4);

        match AtomType::decode(&data, offset).unwrap() {
            AtomType::Sdtp(sdtp) => assert_eq!(sdtp.len(), 4),
            other => panic!("expected sdtp, got {other:?}"),
        }

        // no enclosing sample table, first 'stsz' in the buffer
        let data = [stsz(0, &[1, 2], 2), atom(b"sdtp", &[0, 0, 0, 0, 0x10, 0x20])].concat();
        assert_eq!(Sdtp::decode(&data).unwrap().len(), 2);
    }

    #[test]
    fn movie_header() {
        let data = atom(b"moov", &mvhd(1000, 5000, &IDENTITY));
        let mvhd = Mvhd::decode(&data).unwrap();
        assert_eq!(mvhd.atom_size(), 108);
        assert_eq!(mvhd.time_scale(), 1000);
        assert_eq!(mvhd.duration(), time::Duration::seconds(5));
        assert_eq!(mvhd.preferred_rate(), 1.0);
        assert_eq!(mvhd.preferred_volume(), 1.0);
        assert_eq!(mvhd.next_track_id(), 2);
        assert_eq!(mvhd.creation_time(), mp4_time_zero());
        assert_eq!(mvhd.modification_time(), mp4_time_zero() + time::Duration::HOUR);
        assert!(mvhd.rotation().is_none());
        assert_eq!(mvhd.matrix(), Matrix::identity());

        let mp4 = Mp4::new(&data);
        assert_eq!(mp4.duration().unwrap(), time::Duration::seconds(5));
    }

    #[test]
    fn track_header() {
        let data = tkhd(1, &ROTATE_90);
        let tkhd = Tkhd::decode(&data).unwrap();
        assert_eq!(tkhd.atom_size(), 92);
        assert_eq!(tkhd.track_id(), 1);
        assert_eq!(tkhd.duration(), 90_000);
        assert_eq!(tkhd.duration_sec(90_000), 1.0);
        assert_eq!(tkhd.volume(), 1.0);
        assert_eq!(tkhd.width(), 1920.0);
        assert_eq!(tkhd.height(), 1080.0);
        assert_eq!(tkhd.rotation().and_then(|r| r.get(1, 0)), Some(90));
        assert!((tkhd.matrix().rotation_degrees() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn media_header() {
        let body = [be32(&[0, 0, 0, 48_000, 96_000]), vec![0x55, 0xC4, 0, 0]].concat();
        let mdhd = Mdhd::decode(&atom(b"mdhd", &body)).unwrap();
        assert_eq!(mdhd.time_scale(), 48_000);
        assert_eq!(mdhd.duration(), time::Duration::seconds(2));
        assert_eq!(mdhd.language(), "und");
    }

    #[test]
    fn handler_names() {
        let data = hdlr(b"vide", b"Core Media Video\0");
        let handler = Hdlr::decode(&data).unwrap();
        assert_eq!(handler.component_type(), Some("mhlr"));
        assert_eq!(handler.component_sub_type(), Some("vide"));
        assert_eq!(handler.media_type(), ComponentType::Video);
        assert_eq!(handler.component_manufacturer(), "0");
        assert_eq!(handler.component_name_tag(), Some("Core"));
        assert_eq!(handler.component_name(), "Core Media Video");

        // counted string, trailing space
        let data = hdlr(b"meta", b"\x0AGoPro MET ");
        let handler = Hdlr::decode(&data).unwrap();
        assert_eq!(handler.media_type(), ComponentType::Meta);
        assert!(handler.component_name_tag().is_some());
        assert_eq!(handler.component_name(), "GoPro MET");

        // no name
        let data = hdlr(b"soun", b"");
        let handler = Hdlr::decode(&data).unwrap();
        assert_eq!(handler.component_name_tag(), None);
        assert_eq!(handler.component_name(), "");
    }

    #[test]
    fn rotation_identity_is_absent() {
        assert_eq!(RotationMatrix::from_raw(&IDENTITY), None);

        let data = [vec![0; 6], matrix_bytes(&IDENTITY)].concat();
        assert_eq!(decode_rotation_matrix(&data, 6).unwrap(), None);
    }

    #[test]
    fn rotation_90_degrees() {
        let data = [vec![0; 6], matrix_bytes(&ROTATE_90)].concat();
        let rotation = decode_rotation_matrix(&data, 6).unwrap().unwrap();
        assert_eq!(rotation.rows(), &[[0, 0, 0], [90, 0, 0], [0, 0, 0]]);

        assert!(matches!(decode_rotation_matrix(&data, 10), Err(Mp4Error::BoundsError(_))));
    }

    #[test]
    fn rotation_third_column_and_short_values() {
        // third column splits in 6 character chunks,
        // leaving at most two high hex digits
        let third_column = [0, 0, -1, 0, 0, 0, 0, 0, 0x4000_0000];
        assert_eq!(RotationMatrix::from_raw(&third_column), None);
        let first_column = [-1, 0, 0, 0, 0, 0, 0, 0, 0x4000_0000];
        assert_eq!(RotationMatrix::from_raw(&first_column).and_then(|r| r.get(0, 0)), Some(90));

        // single chunk: "1234" parsed as decimal 1234, degrees set
        // but the matrix is not marked as relevant
        let short = [0x1234, 0, 0, 0, 0, 0, 0, 0, 0x4000_0000];
        assert_eq!(RotationMatrix::from_raw(&short), None);

        let mixed = [0x1234, 0, 0, -0x0001_0000, 0, 0, 0, 0, 0x4000_0000];
        let rotation = RotationMatrix::from_raw(&mixed).unwrap();
        assert_eq!(rotation.rows(), &[[1, 0, 0], [90, 0, 0], [0, 0, 0]]);
    }

    #[test]
    fn fixed_point_matrix() {
        assert_eq!(Matrix::identity().rotation_degrees(), 0.0);
        assert!((Matrix::from_raw(&ROTATE_90).rotation_degrees() - 90.0).abs() < 1e-9);

        let rotate_180 = [-0x0001_0000, 0, 0, 0, -0x0001_0000, 0, 0, 0, 0x4000_0000];
        assert!((Matrix::from_raw(&rotate_180).rotation_degrees() - 180.0).abs() < 1e-9);

        let translated = [0x0001_0000, 0, 0, 0, 0x0001_0000, 0, 10 << 16, 20 << 16, 0x4000_0000];
        assert_eq!(Matrix::from_raw(&translated).translation(), (10.0, 20.0));
    }

    #[test]
    fn rotations_for_all_headers() {
        let trak1 = atom(b"trak", &tkhd(1, &ROTATE_90));
        let trak2 = atom(b"trak", &tkhd(2, &IDENTITY));
        let data = atom(b"moov", &[mvhd(1000, 1000, &IDENTITY), trak1, trak2].concat());

        let rotations = Mp4::new(&data).rotations();
        assert_eq!(rotations.len(), 1);
        assert_eq!(rotations[0].get(1, 0), Some(90));
    }

    #[test]
    fn header_walk() {
        let trak = atom(b"trak", &tkhd(1, &IDENTITY));
        let data = [
            atom(b"moov", &[mvhd(1000, 1000, &IDENTITY), trak].concat()),
            atom(b"free", &[0; 4]),
        ].concat();

        let names: Vec<String> = Headers::new(&data)
            .map(|h| h.unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["moov", "mvhd", "trak", "tkhd", "free"]);

        let mp4 = Mp4::new(&data);
        let mvhd = mp4.headers().nth(1).unwrap().unwrap();
        assert_eq!(mvhd.offset(), 8);
        assert_eq!(mvhd.atom_size(), 108);
        assert!(mp4.headers().next().unwrap().unwrap().is_container());
    }

    #[test]
    fn header_walk_stops_on_64_bit_size() {
        let data = [
            atom(b"free", &[0; 4]),
            be32(&[1]),
            b"mdat".to_vec(),
            vec![0; 8],
        ].concat();

        let headers: Vec<_> = Headers::new(&data).collect();
        assert_eq!(headers.len(), 2);
        assert!(headers[0].is_ok());
        assert_eq!(headers[1].as_ref().unwrap_err().kind(), ErrorKind::Unsupported);
    }

    #[test]
    fn track_views() {
        let trak1 = atom(b"trak", &[
            tkhd(1, &IDENTITY),
            hdlr(b"vide", b"Core Media Video\0"),
            stsz(0, &[10, 20], 2),
        ].concat());
        let trak2 = atom(b"trak", &[
            tkhd(2, &IDENTITY),
            hdlr(b"meta", b"\x0AGoPro MET "),
            stsz(0, &[30, 40, 50], 3),
        ].concat());
        let data = atom(b"moov", &[trak1, trak2].concat());

        let mp4 = Mp4::new(&data);
        assert_eq!(mp4.tracks().len(), 2);
        assert_eq!(mp4.stsz().unwrap().no_of_entries(), 2);

        let track = mp4.track("GoPro MET").unwrap();
        assert_eq!(track.view().tkhd().unwrap().track_id(), 2);
        assert_eq!(track.view().stsz().unwrap().sizes().collect::<Vec<_>>(), vec![30, 40, 50]);

        assert_eq!(mp4.track("GoPro SOS").unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn user_data() {
        let nam = atom(&[0xA9, b'n', b'a', b'm'], b"Clip title");
        let wloc = atom(b"WLOC", &[0, 1, 0, 2]);
        let data = atom(b"moov", &atom(b"udta", &[nam, wloc].concat()));

        let udta = Udta::decode(&data).unwrap();
        assert_eq!(udta.len(), 2);
        assert_eq!(udta.fields[0].offset, 8);

        let nam = udta.find("©nam").unwrap();
        assert!(nam.matches("©nam"));
        assert_eq!(nam.size, 18);
        assert_eq!(nam.to_string().as_deref(), Some("Clip title"));

        let wloc = udta.find("WLOC").unwrap();
        assert_eq!(wloc.to_type::<u16>(Endian::Big).unwrap(), vec![1, 2]);
        assert_eq!(wloc.to_type::<u16>(Endian::Little).unwrap(), vec![256, 512]);

        assert!(udta.find("©day").is_none());

        let offset = find_tag_offsets("udta", &data)[0];
        match AtomType::decode(&data, offset).unwrap() {
            AtomType::Udta(udta) => assert_eq!(udta.len(), 2),
            other => panic!("expected udta, got {other:?}"),
        }
    }

    #[test]
    fn containers_decode_to_header() {
        let data = atom(b"moov", &atom(b"free", &[0; 4]));
        let atom_type = AtomType::decode(&data, 4).unwrap();
        assert!(atom_type.is_container());
        assert_eq!(atom_type.name(), FourCC::Moov);
        assert!(!atom_type.is_sample_table());

        let data = stco(&[1]);
        assert!(AtomType::decode(&data, 4).unwrap().is_sample_table());
    }
}
